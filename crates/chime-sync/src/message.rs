//! Message codec for the sync protocol
//!
//! Device and controller share this codec, so the device's own
//! zone-change publish round-trips through the exact format the
//! controller consumes.

use serde::{Deserialize, Serialize};

use chime_core::{ChimeError, ChimeResult};

use crate::Channel;

/// Time-sync payload: `{"epoch": 1625074800}`
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpochPayload {
    pub epoch: u32,
}

/// One alarm entry on the wire
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlarmEntry {
    /// `HH:MM`, validated at apply time, not at decode time
    pub time: String,
    /// Zone name the alarm is expressed in
    pub zone: String,
}

impl AlarmEntry {
    pub fn new(time: impl Into<String>, zone: impl Into<String>) -> Self {
        AlarmEntry {
            time: time.into(),
            zone: zone.into(),
        }
    }
}

/// A decoded inbound message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InboundMessage {
    /// Overwrite the device epoch
    TimeSync(u32),
    /// Select a zone by name
    ZoneChange(String),
    /// Replace the whole alarm table
    AlarmSync(Vec<AlarmEntry>),
}

impl InboundMessage {
    /// Decode a payload received on a channel
    ///
    /// A whole-payload failure is an error here; the caller keeps its
    /// previous state. Per-entry alarm validation happens at apply
    /// time so one bad entry cannot reject the batch.
    pub fn decode(channel: Channel, payload: &str) -> ChimeResult<Self> {
        match channel {
            Channel::TimeSync => {
                let body: EpochPayload = serde_json::from_str(payload)
                    .map_err(|e| ChimeError::InvalidEpoch(e.to_string()))?;
                Ok(InboundMessage::TimeSync(body.epoch))
            }
            Channel::ZoneChange => Ok(InboundMessage::ZoneChange(payload.to_string())),
            Channel::AlarmSync => {
                let entries: Vec<AlarmEntry> = serde_json::from_str(payload)
                    .map_err(|e| ChimeError::invalid_payload(channel.as_str(), e.to_string()))?;
                Ok(InboundMessage::AlarmSync(entries))
            }
        }
    }

    /// Decode from a raw wire label and payload
    pub fn decode_labeled(label: &str, payload: &str) -> ChimeResult<Self> {
        let channel = Channel::from_label(label)?;
        Self::decode(channel, payload)
    }
}

/// A message produced for the transport collaborator to publish
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutboundMessage {
    TimeSync { epoch: u32 },
    ZoneChange { zone: String },
    AlarmSnapshot { alarms: Vec<AlarmEntry> },
}

impl OutboundMessage {
    /// Channel this message belongs on
    pub fn channel(&self) -> Channel {
        match self {
            OutboundMessage::TimeSync { .. } => Channel::TimeSync,
            OutboundMessage::ZoneChange { .. } => Channel::ZoneChange,
            OutboundMessage::AlarmSnapshot { .. } => Channel::AlarmSync,
        }
    }

    /// Encode the wire payload
    ///
    /// Zone changes are raw strings; the other two channels are JSON.
    pub fn encode(&self) -> String {
        match self {
            OutboundMessage::TimeSync { epoch } => {
                // Serializing a plain-integer struct cannot fail
                serde_json::to_string(&EpochPayload { epoch: *epoch })
                    .unwrap_or_else(|_| String::from("{}"))
            }
            OutboundMessage::ZoneChange { zone } => zone.clone(),
            OutboundMessage::AlarmSnapshot { alarms } => {
                serde_json::to_string(alarms).unwrap_or_else(|_| String::from("[]"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_time_sync() {
        let msg = InboundMessage::decode(Channel::TimeSync, r#"{"epoch": 1625074800}"#).unwrap();
        assert_eq!(msg, InboundMessage::TimeSync(1_625_074_800));
    }

    #[test]
    fn test_decode_time_sync_rejects_garbage() {
        for bad in ["", "epoch", r#"{"epoch": "soon"}"#, r#"{"epoch": -5}"#] {
            assert!(matches!(
                InboundMessage::decode(Channel::TimeSync, bad),
                Err(ChimeError::InvalidEpoch(_))
            ));
        }
    }

    #[test]
    fn test_decode_zone_change_is_raw() {
        let msg = InboundMessage::decode(Channel::ZoneChange, "Tashkent").unwrap();
        assert_eq!(msg, InboundMessage::ZoneChange("Tashkent".into()));
    }

    #[test]
    fn test_decode_alarm_sync() {
        let payload = r#"[{"time":"07:30","zone":"CET"},{"time":"12:00","zone":"UTC"}]"#;
        let msg = InboundMessage::decode(Channel::AlarmSync, payload).unwrap();
        assert_eq!(
            msg,
            InboundMessage::AlarmSync(vec![
                AlarmEntry::new("07:30", "CET"),
                AlarmEntry::new("12:00", "UTC"),
            ])
        );
    }

    #[test]
    fn test_decode_alarm_sync_whole_payload_failure() {
        assert!(matches!(
            InboundMessage::decode(Channel::AlarmSync, "{not json"),
            Err(ChimeError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn test_outbound_roundtrips_through_inbound() {
        let out = OutboundMessage::AlarmSnapshot {
            alarms: vec![AlarmEntry::new("06:15", "EST")],
        };
        let decoded = InboundMessage::decode(out.channel(), &out.encode()).unwrap();
        assert_eq!(
            decoded,
            InboundMessage::AlarmSync(vec![AlarmEntry::new("06:15", "EST")])
        );

        let out = OutboundMessage::TimeSync { epoch: 3600 };
        assert_eq!(
            InboundMessage::decode(out.channel(), &out.encode()).unwrap(),
            InboundMessage::TimeSync(3600)
        );

        let out = OutboundMessage::ZoneChange {
            zone: "CET".into(),
        };
        assert_eq!(
            InboundMessage::decode(out.channel(), &out.encode()).unwrap(),
            InboundMessage::ZoneChange("CET".into())
        );
    }

    proptest! {
        #[test]
        fn prop_any_epoch_roundtrips(epoch in any::<u32>()) {
            let out = OutboundMessage::TimeSync { epoch };
            let decoded = InboundMessage::decode(out.channel(), &out.encode()).unwrap();
            prop_assert_eq!(decoded, InboundMessage::TimeSync(epoch));
        }
    }
}
