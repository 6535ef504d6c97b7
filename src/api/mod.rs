//! Typed access to the platform's REST services.
//!
//! `Api` is the seam between the command processors and the wire: one method
//! per remote operation, implemented over HTTPS by [`client::Client`] and by
//! an in-memory mock in tests. Processors are generic over it, so nothing in
//! the crate holds a global client.
pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::Client;

use crate::error::Result;
use types::{
    AccountHolder, AndroidAppPage, BalanceAccount, BalanceAccountHolder, LegalEntity,
    OfflinePaymentsUpdate, PaymentMethodSettings, StorePage, StoreStatus, Sweep, SweepPage,
    TerminalPage, TerminalSettings, UpdateAccountHolder, UpdateSplitConfigurationRequest,
};

pub trait Api {
    /// Fetch an account holder by its code.
    fn account_holder(&self, code: &str) -> Result<AccountHolder>;

    /// Push a modified account holder back to the platform.
    fn update_account_holder(&self, holder: &UpdateAccountHolder) -> Result<()>;

    /// Close an account holder.
    fn close_account_holder(&self, code: &str) -> Result<()>;

    /// Patch a store's split configuration on the balance platform.
    fn update_split_configuration(
        &self,
        merchant_id: &str,
        store_id: &str,
        request: &UpdateSplitConfigurationRequest,
    ) -> Result<()>;

    /// Search stores by external reference.
    fn search_stores(&self, reference: &str) -> Result<StorePage>;

    /// Set a store's lifecycle status by management ID.
    fn set_store_status(&self, store_id: &str, status: StoreStatus) -> Result<()>;

    /// Add one payment method to a store.
    fn add_payment_method(
        &self,
        merchant_id: &str,
        store_id: &str,
        business_line_id: &str,
        method: &str,
        currency: &str,
    ) -> Result<PaymentMethodSettings>;

    /// Fetch a balance account.
    fn balance_account(&self, balance_id: &str) -> Result<BalanceAccount>;

    /// Fetch a balance-platform account holder.
    fn balance_account_holder(&self, account_holder_id: &str) -> Result<BalanceAccountHolder>;

    /// Fetch a legal entity with its transfer instruments.
    fn legal_entity(&self, legal_entity_id: &str) -> Result<LegalEntity>;

    /// List sweep configurations of a balance account.
    fn sweeps(&self, balance_id: &str) -> Result<SweepPage>;

    /// Point a sweep's counterparty at a transfer instrument.
    fn update_sweep(
        &self,
        balance_id: &str,
        sweep_id: &str,
        transfer_instrument_id: &str,
    ) -> Result<Sweep>;

    /// Patch a balance account's sales-day closing time and settlement delay.
    fn set_sales_close_time(
        &self,
        balance_id: &str,
        closing_time: &str,
        delay_days: u32,
    ) -> Result<BalanceAccount>;

    /// Reassign a terminal to a store, or to the merchant's inventory when no
    /// store is given.
    fn reassign_terminal(&self, terminal_id: &str, merchant_id: &str, store_id: &str)
        -> Result<()>;

    /// Fetch a terminal's current settings.
    fn terminal_settings(&self, terminal_id: &str) -> Result<TerminalSettings>;

    /// Activate or deactivate the terminal's SIM card.
    fn set_sim_card_status(&self, terminal_id: &str, disable: bool) -> Result<()>;

    /// Push zeroed offline-payment limits to a terminal.
    fn disable_offline_payments(
        &self,
        terminal_id: &str,
        update: &OfflinePaymentsUpdate,
    ) -> Result<()>;

    /// Search terminals by store and/or free-text query (serial number).
    /// One page of at most 100 results.
    fn search_terminals(&self, store_id: &str, query: &str) -> Result<TerminalPage>;

    /// List a company's Android apps for one package name.
    fn search_android_apps(&self, company_id: &str, package_name: &str) -> Result<AndroidAppPage>;

    /// Schedule an app installation on the given terminals.
    fn install_android_app(
        &self,
        app_id: &str,
        store_id: &str,
        terminal_ids: &[String],
        scheduled_at: &str,
    ) -> Result<()>;
}

impl<T: Api> Api for &T {
    fn account_holder(&self, code: &str) -> Result<AccountHolder> {
        (**self).account_holder(code)
    }

    fn update_account_holder(&self, holder: &UpdateAccountHolder) -> Result<()> {
        (**self).update_account_holder(holder)
    }

    fn close_account_holder(&self, code: &str) -> Result<()> {
        (**self).close_account_holder(code)
    }

    fn update_split_configuration(
        &self,
        merchant_id: &str,
        store_id: &str,
        request: &UpdateSplitConfigurationRequest,
    ) -> Result<()> {
        (**self).update_split_configuration(merchant_id, store_id, request)
    }

    fn search_stores(&self, reference: &str) -> Result<StorePage> {
        (**self).search_stores(reference)
    }

    fn set_store_status(&self, store_id: &str, status: StoreStatus) -> Result<()> {
        (**self).set_store_status(store_id, status)
    }

    fn add_payment_method(
        &self,
        merchant_id: &str,
        store_id: &str,
        business_line_id: &str,
        method: &str,
        currency: &str,
    ) -> Result<PaymentMethodSettings> {
        (**self).add_payment_method(merchant_id, store_id, business_line_id, method, currency)
    }

    fn balance_account(&self, balance_id: &str) -> Result<BalanceAccount> {
        (**self).balance_account(balance_id)
    }

    fn balance_account_holder(&self, account_holder_id: &str) -> Result<BalanceAccountHolder> {
        (**self).balance_account_holder(account_holder_id)
    }

    fn legal_entity(&self, legal_entity_id: &str) -> Result<LegalEntity> {
        (**self).legal_entity(legal_entity_id)
    }

    fn sweeps(&self, balance_id: &str) -> Result<SweepPage> {
        (**self).sweeps(balance_id)
    }

    fn update_sweep(
        &self,
        balance_id: &str,
        sweep_id: &str,
        transfer_instrument_id: &str,
    ) -> Result<Sweep> {
        (**self).update_sweep(balance_id, sweep_id, transfer_instrument_id)
    }

    fn set_sales_close_time(
        &self,
        balance_id: &str,
        closing_time: &str,
        delay_days: u32,
    ) -> Result<BalanceAccount> {
        (**self).set_sales_close_time(balance_id, closing_time, delay_days)
    }

    fn reassign_terminal(
        &self,
        terminal_id: &str,
        merchant_id: &str,
        store_id: &str,
    ) -> Result<()> {
        (**self).reassign_terminal(terminal_id, merchant_id, store_id)
    }

    fn terminal_settings(&self, terminal_id: &str) -> Result<TerminalSettings> {
        (**self).terminal_settings(terminal_id)
    }

    fn set_sim_card_status(&self, terminal_id: &str, disable: bool) -> Result<()> {
        (**self).set_sim_card_status(terminal_id, disable)
    }

    fn disable_offline_payments(
        &self,
        terminal_id: &str,
        update: &OfflinePaymentsUpdate,
    ) -> Result<()> {
        (**self).disable_offline_payments(terminal_id, update)
    }

    fn search_terminals(&self, store_id: &str, query: &str) -> Result<TerminalPage> {
        (**self).search_terminals(store_id, query)
    }

    fn search_android_apps(&self, company_id: &str, package_name: &str) -> Result<AndroidAppPage> {
        (**self).search_android_apps(company_id, package_name)
    }

    fn install_android_app(
        &self,
        app_id: &str,
        store_id: &str,
        terminal_ids: &[String],
        scheduled_at: &str,
    ) -> Result<()> {
        (**self).install_android_app(app_id, store_id, terminal_ids, scheduled_at)
    }
}
