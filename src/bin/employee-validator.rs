// Copyright (c) 2025 - Cowboy AI, Inc.
//! Employee Validator
//!
//! Builds employee value objects from raw environment input and prints their
//! canonical serialized form, the way a boundary layer (HTTP handler, import
//! job) would before handing them to the aggregate.
//!
//! Run with:
//!   EMPLOYEE_REGISTRATION=12345 EMPLOYEE_SALARY=5000 cargo run --bin employee-validator
//!
//! Optional adjustments, applied in order bonus, deduction, raise:
//! - SALARY_BONUS: amount added to the salary
//! - SALARY_DEDUCTION: amount subtracted from the salary
//! - SALARY_RAISE_PERCENT: percentage increase (0, 100]

use anyhow::{Context, Result};
use cim_domain_employee::{MonetaryAmount, RegistrationId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::env::VarError;
use std::str::FromStr;
use tracing::{debug, info};

/// Configuration for the validator
#[derive(Debug, Clone)]
struct ValidatorConfig {
    /// Raw registration number
    registration: String,
    /// Raw salary amount
    salary: String,
    /// Optional bonus added to the salary
    bonus: Option<Decimal>,
    /// Optional deduction subtracted from the salary
    deduction: Option<Decimal>,
    /// Optional percentage raise
    raise_percent: Option<Decimal>,
}

impl ValidatorConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let registration =
            std::env::var("EMPLOYEE_REGISTRATION").context("EMPLOYEE_REGISTRATION not set")?;

        let salary = std::env::var("EMPLOYEE_SALARY").context("EMPLOYEE_SALARY not set")?;

        Ok(Self {
            registration,
            salary,
            bonus: optional_decimal("SALARY_BONUS")?,
            deduction: optional_decimal("SALARY_DEDUCTION")?,
            raise_percent: optional_decimal("SALARY_RAISE_PERCENT")?,
        })
    }
}

fn optional_decimal(key: &str) -> Result<Option<Decimal>> {
    match std::env::var(key) {
        Ok(raw) => Decimal::from_str(raw.trim())
            .map(Some)
            .with_context(|| format!("{key} is not a decimal number: {raw:?}")),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("{key} is not readable")),
    }
}

/// Serialized employee fields
#[derive(Debug, Serialize)]
struct EmployeeRecord {
    registration: RegistrationId,
    salary: MonetaryAmount,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ValidatorConfig::from_env()?;
    debug!(?config, "Configuration loaded");

    let registration: RegistrationId = config
        .registration
        .parse()
        .context("Invalid EMPLOYEE_REGISTRATION")?;
    info!(%registration, "Registration number accepted");

    let mut salary: MonetaryAmount = config.salary.parse().context("Invalid EMPLOYEE_SALARY")?;
    info!(%salary, "Salary accepted");

    if let Some(bonus) = config.bonus {
        salary = salary.add(bonus).context("Invalid SALARY_BONUS")?;
        info!(%bonus, %salary, "Bonus applied");
    }

    if let Some(deduction) = config.deduction {
        salary = salary
            .subtract(deduction)
            .context("Invalid SALARY_DEDUCTION")?;
        info!(%deduction, %salary, "Deduction applied");
    }

    if let Some(pct) = config.raise_percent {
        salary = salary
            .increase_by_percentage(pct)
            .context("Invalid SALARY_RAISE_PERCENT")?;
        info!(%pct, %salary, "Raise applied");
    }

    let record = EmployeeRecord {
        registration,
        salary,
    };
    println!("{}", serde_json::to_string(&record)?);

    Ok(())
}
