//! Static metric tables.
//!
//! Table order is evaluation order and also field order on the emitted line.
//! Consecutive entries that share a service/action are answered from a single
//! remote call, so keep entries for the same action next to each other.

const WAN_COMMON: &str = "urn:schemas-upnp-org:service:WANCommonInterfaceConfig:1";
const WAN_IP: &str = "urn:schemas-upnp-org:service:WANIPConnection:1";

/// Maps one field of one remote action response to an output metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub service: &'static str,
    pub action: &'static str,
    /// Field name inside the action response.
    pub result: &'static str,
    /// Field name on the emitted line.
    pub name: &'static str,
}

impl MetricSpec {
    pub const fn new(
        service: &'static str,
        action: &'static str,
        result: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            service,
            action,
            result,
            name,
        }
    }
}

/// An ordered metric table plus the `source=` tag its line carries.
#[derive(Debug, Clone, Copy)]
pub struct MetricSource {
    pub name: &'static str,
    pub metrics: &'static [MetricSpec],
}

/// WAN traffic counters and connection status.
pub const WAN: MetricSource = MetricSource {
    name: "wan",
    metrics: &[
        MetricSpec::new(
            WAN_COMMON,
            "GetTotalPacketsReceived",
            "TotalPacketsReceived",
            "packets_received",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetTotalPacketsSent",
            "TotalPacketsSent",
            "packets_sent",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "TotalBytesReceived",
            "bytes_received",
        ),
        MetricSpec::new(WAN_COMMON, "GetAddonInfos", "TotalBytesSent", "bytes_sent"),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "ByteSendRate",
            "bytes_send_rate",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "ByteReceiveRate",
            "bytes_receive_rate",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "PacketSendRate",
            "packet_send_rate",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "PacketReceiveRate",
            "packet_receive_rate",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "NewX_AVM_DE_TotalBytesSent64",
            "total_bytes_sent_64",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetAddonInfos",
            "NewX_AVM_DE_TotalBytesReceived64",
            "total_bytes_received_64",
        ),
        MetricSpec::new(
            WAN_COMMON,
            "GetCommonLinkProperties",
            "PhysicalLinkStatus",
            "link_status",
        ),
        MetricSpec::new(
            WAN_IP,
            "GetStatusInfo",
            "ConnectionStatus",
            "connection_status",
        ),
        MetricSpec::new(
            WAN_IP,
            "GetStatusInfo",
            "LastConnectionError",
            "last_connection_error",
        ),
        MetricSpec::new(WAN_IP, "GetStatusInfo", "Uptime", "uptime"),
    ],
};
