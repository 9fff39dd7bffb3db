use serde::Deserialize;

use crate::core::error::Error;

#[derive(Debug, Deserialize)]
pub(crate) struct NewMessage {
    pub(crate) message: String,
    pub(crate) to: String,
    #[serde(rename = "from")]
    pub(crate) sender: String,
    // wire name kept from the upstream contract
    #[serde(rename = "timeToLifeSec")]
    pub(crate) time_to_life_sec: i64,
}

impl NewMessage {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.message.is_empty() {
            return Err(Error::InvalidMessage("message must not be empty".into()));
        }

        if self.to.is_empty() || self.sender.is_empty() {
            return Err(Error::InvalidMessage(
                "to and from must not be empty".into(),
            ));
        }

        if self.time_to_life_sec <= 0 {
            return Err(Error::InvalidMessage(
                "timeToLifeSec must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_field_names() {
        let message: NewMessage = serde_json::from_str(
            r#"{"message": "This is a test", "to": "Juan Perez", "from": "Rita Asturia", "timeToLifeSec": 45}"#,
        )
        .unwrap();

        assert_eq!(message.sender, "Rita Asturia");
        assert_eq!(message.time_to_life_sec, 45);
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_ttl() {
        let message: NewMessage = serde_json::from_str(
            r#"{"message": "x", "to": "a", "from": "b", "timeToLifeSec": -1}"#,
        )
        .unwrap();

        assert!(matches!(
            message.validate(),
            Err(Error::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_rejects_empty_recipient() {
        let message: NewMessage =
            serde_json::from_str(r#"{"message": "x", "to": "", "from": "b", "timeToLifeSec": 1}"#)
                .unwrap();

        assert!(message.validate().is_err());
    }
}
