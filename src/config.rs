use anyhow::{anyhow, Result};
use clap::ArgMatches;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Acting role. Determines which API endpoints and UI actions are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tenant,
    Owner,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Owner => "owner",
            Role::Admin => "admin",
        }
    }

    /// Demo identity the API expects for each role when no explicit user id
    /// is configured. The backend has no real authentication.
    pub fn demo_user_id(self) -> &'static str {
        match self {
            Role::Tenant => "tenant_atheeq",
            Role::Owner => "owner_mr_silva",
            Role::Admin => "admin_demo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "tenant" => Ok(Role::Tenant),
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            other => Err(anyhow!(
                "Unknown role '{}'. Expected tenant, owner or admin",
                other
            )),
        }
    }
}

/// The acting principal sent with every API request. Built once per role and
/// handed to the API client; switching roles produces a fresh session rather
/// than mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role: Role,
    user_id: String,
    user_id_override: Option<String>,
}

impl Session {
    pub fn new(role: Role, user_id_override: Option<String>) -> Self {
        let user_id = user_id_override
            .clone()
            .unwrap_or_else(|| role.demo_user_id().to_string());
        Self {
            role,
            user_id,
            user_id_override,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Session for a different role, keeping any explicit user-id override.
    pub fn with_role(&self, role: Role) -> Self {
        Self::new(role, self.user_id_override.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub role: Role,
    pub user_id: Option<String>,
    pub page_size: u32,
}

impl Config {
    pub fn from_args_and_env(matches: &ArgMatches) -> Result<Self> {
        let api_base_url = matches
            .get_one::<String>("api-base")
            .cloned()
            .or_else(|| env::var("RENTEASE_API_BASE_URL").ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        // Path building assumes no trailing slash on the base.
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let role = matches
            .get_one::<String>("role")
            .cloned()
            .or_else(|| env::var("RENTEASE_ROLE").ok())
            .unwrap_or_else(|| "tenant".to_string())
            .parse::<Role>()?;

        let user_id = matches
            .get_one::<String>("user-id")
            .cloned()
            .or_else(|| env::var("RENTEASE_USER_ID").ok());

        let page_size = match matches
            .get_one::<String>("page-size")
            .cloned()
            .or_else(|| env::var("RENTEASE_PAGE_SIZE").ok())
        {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| anyhow!("Invalid page size '{}'", raw))?,
            None => 50,
        };

        Ok(Config {
            api_base_url,
            role,
            user_id,
            page_size,
        })
    }

    pub fn session(&self) -> Session {
        Session::new(self.role, self.user_id.clone())
    }
}
