use serde::Serialize;

use crate::token::registry::RegistryStats;

#[derive(Serialize)]
pub(crate) struct IssuedToken {
    pub(crate) token: String,
}

impl IssuedToken {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Receipt {
    pub(crate) message: String,
}

impl Receipt {
    pub(crate) fn new(recipient: &str) -> Self {
        Self {
            message: format!("Hello {} your message will be send", recipient),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Stats {
    pub(crate) active_records: usize,
    pub(crate) total_consumed: u64,
}

impl Stats {
    pub(crate) fn new(stats: &RegistryStats) -> Self {
        Self {
            active_records: stats.active_records,
            total_consumed: stats.total_consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_greets_the_recipient() {
        let receipt = Receipt::new("Juan Perez");

        assert_eq!(receipt.message, "Hello Juan Perez your message will be send");
    }
}
