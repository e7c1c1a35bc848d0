//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = FplError::MissingLeagueId {
            env_var: "FPL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("FPL_LEAGUE_ID"));
    }

    #[test]
    fn test_standings_unavailable_message() {
        let error = FplError::StandingsUnavailable { status: 503 };
        assert_eq!(error.to_string(), "Failed to fetch league standings: 503");
    }

    #[test]
    fn test_upstream_status_message() {
        let error = FplError::UpstreamStatus {
            endpoint: "bootstrap-static".to_string(),
            status: 404,
        };
        assert_eq!(error.to_string(), "FPL API returned 404 for bootstrap-static");
    }

    #[test]
    fn test_invalid_action_message() {
        let error = FplError::InvalidAction {
            action: "drop-tables".to_string(),
        };
        assert!(error.to_string().contains("drop-tables"));
    }

    #[test]
    fn test_retryable_statuses() {
        let retry = |status| {
            FplError::UpstreamStatus {
                endpoint: "x".to_string(),
                status,
            }
            .is_retryable()
        };

        assert!(retry(500));
        assert!(retry(503));
        assert!(retry(429));
        assert!(!retry(404));
        assert!(!retry(400));
    }

    #[test]
    fn test_domain_errors_not_retryable() {
        assert!(!FplError::MissingLeagueId {
            env_var: "FPL_LEAGUE_ID".to_string()
        }
        .is_retryable());
        assert!(!FplError::StandingsUnavailable { status: 500 }.is_retryable());
        assert!(!FplError::InvalidAction {
            action: String::new()
        }
        .is_retryable());
    }
}
