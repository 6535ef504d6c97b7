//! In-memory [`Api`] implementation for processor tests.
//!
//! Fixtures are plain maps keyed the way the real services key their
//! resources; every invocation is recorded as a [`Call`] so tests can assert
//! on exact call sequences and on the absence of mutations in dry runs.
use std::cell::RefCell;
use std::collections::HashMap;

use super::types::{
    AccountHolder, AndroidAppPage, BalanceAccount, BalanceAccountHolder, LegalEntity,
    OfflinePaymentsUpdate, PaymentMethodSettings, StorePage, StoreStatus, Sweep,
    SweepCounterparty, SweepPage, TerminalPage, TerminalSettings, UpdateAccountHolder,
    UpdateSplitConfigurationRequest, SWEEP_ACTIVE,
};
use super::Api;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AccountHolder(String),
    UpdateAccountHolder(Box<UpdateAccountHolder>),
    CloseAccountHolder(String),
    UpdateSplitConfiguration {
        merchant_id: String,
        store_id: String,
        request: UpdateSplitConfigurationRequest,
    },
    SearchStores(String),
    SetStoreStatus(String, StoreStatus),
    AddPaymentMethod {
        merchant_id: String,
        store_id: String,
        business_line_id: String,
        method: String,
        currency: String,
    },
    BalanceAccount(String),
    BalanceAccountHolder(String),
    LegalEntity(String),
    Sweeps(String),
    UpdateSweep {
        balance_id: String,
        sweep_id: String,
        transfer_instrument_id: String,
    },
    SetSalesCloseTime {
        balance_id: String,
        closing_time: String,
        delay_days: u32,
    },
    ReassignTerminal {
        terminal_id: String,
        merchant_id: String,
        store_id: String,
    },
    TerminalSettings(String),
    SetSimCardStatus {
        terminal_id: String,
        disable: bool,
    },
    DisableOfflinePayments {
        terminal_id: String,
        update: OfflinePaymentsUpdate,
    },
    SearchTerminals {
        store_id: String,
        query: String,
    },
    SearchAndroidApps {
        company_id: String,
        package_name: String,
    },
    InstallAndroidApp {
        app_id: String,
        store_id: String,
        terminal_ids: Vec<String>,
        scheduled_at: String,
    },
}

impl Call {
    /// True for calls that change remote state; dry runs must issue none.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Call::UpdateAccountHolder(_)
                | Call::CloseAccountHolder(_)
                | Call::UpdateSplitConfiguration { .. }
                | Call::SetStoreStatus(..)
                | Call::AddPaymentMethod { .. }
                | Call::UpdateSweep { .. }
                | Call::SetSalesCloseTime { .. }
                | Call::ReassignTerminal { .. }
                | Call::SetSimCardStatus { .. }
                | Call::DisableOfflinePayments { .. }
                | Call::InstallAndroidApp { .. }
        )
    }
}

#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    pub account_holders: HashMap<String, AccountHolder>,
    pub stores: HashMap<String, StorePage>,
    pub terminals: HashMap<(String, String), TerminalPage>,
    pub terminal_settings: HashMap<String, TerminalSettings>,
    pub balance_accounts: HashMap<String, BalanceAccount>,
    pub balance_account_holders: HashMap<String, BalanceAccountHolder>,
    pub legal_entities: HashMap<String, LegalEntity>,
    pub sweep_pages: HashMap<String, SweepPage>,
    pub android_apps: HashMap<String, AndroidAppPage>,
    /// When set, every mutating call fails with this HTTP status.
    pub fail_mutations_with: Option<u16>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.is_mutating())
            .cloned()
            .collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        let mutating = call.is_mutating();
        self.calls.borrow_mut().push(call);
        if mutating {
            if let Some(status) = self.fail_mutations_with {
                return Err(Error::Status {
                    status,
                    body: String::new(),
                });
            }
        }
        Ok(())
    }

    fn not_found(what: &str) -> Error {
        Error::Status {
            status: 404,
            body: format!("{what} not found"),
        }
    }
}

impl Api for MockApi {
    fn account_holder(&self, code: &str) -> Result<AccountHolder> {
        self.record(Call::AccountHolder(code.to_string()))?;
        self.account_holders
            .get(code)
            .cloned()
            .ok_or_else(|| Self::not_found("account holder"))
    }

    fn update_account_holder(&self, holder: &UpdateAccountHolder) -> Result<()> {
        self.record(Call::UpdateAccountHolder(Box::new(holder.clone())))
    }

    fn close_account_holder(&self, code: &str) -> Result<()> {
        self.record(Call::CloseAccountHolder(code.to_string()))
    }

    fn update_split_configuration(
        &self,
        merchant_id: &str,
        store_id: &str,
        request: &UpdateSplitConfigurationRequest,
    ) -> Result<()> {
        self.record(Call::UpdateSplitConfiguration {
            merchant_id: merchant_id.to_string(),
            store_id: store_id.to_string(),
            request: request.clone(),
        })
    }

    fn search_stores(&self, reference: &str) -> Result<StorePage> {
        self.record(Call::SearchStores(reference.to_string()))?;
        Ok(self.stores.get(reference).cloned().unwrap_or_default())
    }

    fn set_store_status(&self, store_id: &str, status: StoreStatus) -> Result<()> {
        self.record(Call::SetStoreStatus(store_id.to_string(), status))
    }

    fn add_payment_method(
        &self,
        merchant_id: &str,
        store_id: &str,
        business_line_id: &str,
        method: &str,
        currency: &str,
    ) -> Result<PaymentMethodSettings> {
        self.record(Call::AddPaymentMethod {
            merchant_id: merchant_id.to_string(),
            store_id: store_id.to_string(),
            business_line_id: business_line_id.to_string(),
            method: method.to_string(),
            currency: currency.to_string(),
        })?;
        Ok(PaymentMethodSettings {
            id: format!("PM-{method}"),
            method_type: method.to_string(),
            store_ids: vec![store_id.to_string()],
            currencies: vec![currency.to_string()],
            enabled: Some(true),
        })
    }

    fn balance_account(&self, balance_id: &str) -> Result<BalanceAccount> {
        self.record(Call::BalanceAccount(balance_id.to_string()))?;
        self.balance_accounts
            .get(balance_id)
            .cloned()
            .ok_or_else(|| Self::not_found("balance account"))
    }

    fn balance_account_holder(&self, account_holder_id: &str) -> Result<BalanceAccountHolder> {
        self.record(Call::BalanceAccountHolder(account_holder_id.to_string()))?;
        self.balance_account_holders
            .get(account_holder_id)
            .cloned()
            .ok_or_else(|| Self::not_found("balance account holder"))
    }

    fn legal_entity(&self, legal_entity_id: &str) -> Result<LegalEntity> {
        self.record(Call::LegalEntity(legal_entity_id.to_string()))?;
        self.legal_entities
            .get(legal_entity_id)
            .cloned()
            .ok_or_else(|| Self::not_found("legal entity"))
    }

    fn sweeps(&self, balance_id: &str) -> Result<SweepPage> {
        self.record(Call::Sweeps(balance_id.to_string()))?;
        Ok(self.sweep_pages.get(balance_id).cloned().unwrap_or_default())
    }

    fn update_sweep(
        &self,
        balance_id: &str,
        sweep_id: &str,
        transfer_instrument_id: &str,
    ) -> Result<Sweep> {
        self.record(Call::UpdateSweep {
            balance_id: balance_id.to_string(),
            sweep_id: sweep_id.to_string(),
            transfer_instrument_id: transfer_instrument_id.to_string(),
        })?;
        Ok(Sweep {
            id: sweep_id.to_string(),
            status: SWEEP_ACTIVE.to_string(),
            counterparty: SweepCounterparty {
                transfer_instrument_id: Some(transfer_instrument_id.to_string()),
                balance_account_id: None,
            },
        })
    }

    fn set_sales_close_time(
        &self,
        balance_id: &str,
        closing_time: &str,
        delay_days: u32,
    ) -> Result<BalanceAccount> {
        self.record(Call::SetSalesCloseTime {
            balance_id: balance_id.to_string(),
            closing_time: closing_time.to_string(),
            delay_days,
        })?;
        Ok(BalanceAccount {
            id: balance_id.to_string(),
            ..Default::default()
        })
    }

    fn reassign_terminal(
        &self,
        terminal_id: &str,
        merchant_id: &str,
        store_id: &str,
    ) -> Result<()> {
        self.record(Call::ReassignTerminal {
            terminal_id: terminal_id.to_string(),
            merchant_id: merchant_id.to_string(),
            store_id: store_id.to_string(),
        })
    }

    fn terminal_settings(&self, terminal_id: &str) -> Result<TerminalSettings> {
        self.record(Call::TerminalSettings(terminal_id.to_string()))?;
        self.terminal_settings
            .get(terminal_id)
            .cloned()
            .ok_or_else(|| Self::not_found("terminal settings"))
    }

    fn set_sim_card_status(&self, terminal_id: &str, disable: bool) -> Result<()> {
        self.record(Call::SetSimCardStatus {
            terminal_id: terminal_id.to_string(),
            disable,
        })
    }

    fn disable_offline_payments(
        &self,
        terminal_id: &str,
        update: &OfflinePaymentsUpdate,
    ) -> Result<()> {
        self.record(Call::DisableOfflinePayments {
            terminal_id: terminal_id.to_string(),
            update: update.clone(),
        })
    }

    fn search_terminals(&self, store_id: &str, query: &str) -> Result<TerminalPage> {
        self.record(Call::SearchTerminals {
            store_id: store_id.to_string(),
            query: query.to_string(),
        })?;
        Ok(self
            .terminals
            .get(&(store_id.to_string(), query.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn search_android_apps(&self, company_id: &str, package_name: &str) -> Result<AndroidAppPage> {
        self.record(Call::SearchAndroidApps {
            company_id: company_id.to_string(),
            package_name: package_name.to_string(),
        })?;
        Ok(self
            .android_apps
            .get(package_name)
            .cloned()
            .unwrap_or_default())
    }

    fn install_android_app(
        &self,
        app_id: &str,
        store_id: &str,
        terminal_ids: &[String],
        scheduled_at: &str,
    ) -> Result<()> {
        self.record(Call::InstallAndroidApp {
            app_id: app_id.to_string(),
            store_id: store_id.to_string(),
            terminal_ids: terminal_ids.to_vec(),
            scheduled_at: scheduled_at.to_string(),
        })
    }
}

/// Fixture helpers shared by the command tests.
pub mod fixtures {
    use super::super::types::{
        Account, AccountHolder, AccountHolderDetails, Store, StoreDetail, StorePage,
        UpdateAccountHolder,
    };

    /// An account holder with one account and one matching store detail.
    pub fn single_store_holder(code: &str, account_code: &str, store_id: &str) -> AccountHolder {
        AccountHolder {
            update: UpdateAccountHolder {
                account_holder_code: code.to_string(),
                account_holder_details: AccountHolderDetails {
                    store_details: vec![StoreDetail {
                        store_id: store_id.to_string(),
                        ..Default::default()
                    }],
                },
            },
            accounts: vec![Account {
                account_code: account_code.to_string(),
                ..Default::default()
            }],
        }
    }

    /// A search result with exactly one store.
    pub fn single_store_page(management_id: &str, reference: &str) -> StorePage {
        StorePage {
            items_total: 1,
            pages_total: 1,
            data: vec![Store {
                id: management_id.to_string(),
                reference: reference.to_string(),
                merchant_id: "M1".to_string(),
                status: "active".to_string(),
                business_line_ids: vec!["BL1".to_string()],
            }],
        }
    }
}
