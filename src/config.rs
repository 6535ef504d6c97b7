//! Environment-driven configuration for the four platform services.
//!
//! Every service (account/legal "CAL", management "MGMT", KYC "LEM",
//! balance "BCL") has a production and a test base URL/API key pair, all
//! required at startup. `Config::resolve` picks one typed bundle per service
//! for the selected environment.
use std::env;

use crate::error::{Error, Result};

/// Which side of the platform a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Test,
    Live,
}

impl Environment {
    pub fn from_prod_flag(prod: bool) -> Self {
        if prod {
            Environment::Live
        } else {
            Environment::Test
        }
    }
}

/// Base URL (hostname) and API key for one service.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

/// Resolved endpoints for a single environment.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub cal: Endpoint,
    pub mgmt: Endpoint,
    pub kyc: Endpoint,
    pub bal: Endpoint,
}

#[derive(Debug, Clone)]
struct ServiceConfig {
    live: Endpoint,
    test: Endpoint,
}

/// Full process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    cal: ServiceConfig,
    mgmt: ServiceConfig,
    kyc: ServiceConfig,
    bal: ServiceConfig,
}

impl Config {
    /// Read all required variables from the process environment.
    /// Fails on the first missing variable, before any record is touched.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &'static str| -> Result<String> {
            lookup(name).ok_or(Error::MissingEnv { name })
        };
        let endpoint = |url: &'static str, key: &'static str| -> Result<Endpoint> {
            Ok(Endpoint {
                base_url: var(url)?,
                api_key: var(key)?,
            })
        };

        Ok(Config {
            cal: ServiceConfig {
                live: endpoint("PLATFORM_CAL_URL", "PLATFORM_CAL_KEY")?,
                test: endpoint("PLATFORM_CAL_TEST_URL", "PLATFORM_CAL_TEST_KEY")?,
            },
            mgmt: ServiceConfig {
                live: endpoint("PLATFORM_MGMT_URL", "PLATFORM_MGMT_KEY")?,
                test: endpoint("PLATFORM_MGMT_TEST_URL", "PLATFORM_MGMT_TEST_KEY")?,
            },
            kyc: ServiceConfig {
                live: endpoint("PLATFORM_KYC_URL", "PLATFORM_KYC_KEY")?,
                test: endpoint("PLATFORM_KYC_TEST_URL", "PLATFORM_KYC_TEST_KEY")?,
            },
            bal: ServiceConfig {
                live: endpoint("PLATFORM_BAL_URL", "PLATFORM_BAL_KEY")?,
                test: endpoint("PLATFORM_BAL_TEST_URL", "PLATFORM_BAL_TEST_KEY")?,
            },
        })
    }

    /// Pick the endpoint bundle for the selected environment.
    pub fn resolve(&self, environment: Environment) -> Endpoints {
        let pick = |service: &ServiceConfig| match environment {
            Environment::Live => service.live.clone(),
            Environment::Test => service.test.clone(),
        };
        Endpoints {
            cal: pick(&self.cal),
            mgmt: pick(&self.mgmt),
            kyc: pick(&self.kyc),
            bal: pick(&self.bal),
        }
    }
}
