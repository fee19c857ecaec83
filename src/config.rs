use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScheduleError};

/// largest number of fractional digits a `Decimal` can hold
const MAX_SCALE: u32 = 28;

/// precision settings for schedule calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// fractional digits of the currency; every amount is rounded to this
    pub currency_scale: u32,
    /// fractional digits kept on the monthly rate, `None` keeps full precision
    #[serde(default)]
    pub periodic_rate_scale: Option<u32>,
}

impl ScheduleConfig {
    /// korean won: whole units, full-precision rate
    pub fn won() -> Self {
        Self {
            currency_scale: 0,
            periodic_rate_scale: None,
        }
    }

    /// two-decimal ledger with the monthly rate cut to ten digits
    pub fn ledger() -> Self {
        Self {
            currency_scale: 2,
            periodic_rate_scale: Some(10),
        }
    }

    /// load from a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScheduleConfig =
            serde_json::from_str(json).map_err(|e| ScheduleError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency_scale > MAX_SCALE {
            return Err(ScheduleError::invalid(
                "currency_scale",
                format!("must be at most {}, got {}", MAX_SCALE, self.currency_scale),
            ));
        }
        if let Some(scale) = self.periodic_rate_scale {
            if scale > MAX_SCALE {
                return Err(ScheduleError::invalid(
                    "periodic_rate_scale",
                    format!("must be at most {}, got {}", MAX_SCALE, scale),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::won()
    }
}
