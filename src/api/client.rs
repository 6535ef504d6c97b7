//! HTTPS implementation of the [`Api`] trait.
//!
//! Every operation issues one signed request against the service endpoints
//! resolved at startup, logs entry and exit at info, and decodes the JSON
//! body into the operation's response shape. There is no retry: a transport
//! error or non-success status surfaces immediately. Non-success bodies are
//! decoded as the platform's structured error when possible, otherwise the
//! raw status and body are reported.
use reqwest::blocking::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use super::types::{
    AccountHolder, AccountHolderRequest, ActionDetails, AddPaymentMethodRequest, AndroidAppPage,
    ApiError, BalanceAccount, BalanceAccountHolder, CloseAccountHolderResponse, ConnectivityUpdate,
    LegalEntity, OfflinePaymentsUpdate, PaymentMethodSettings, PlatformPaymentConfiguration,
    ReassignTerminalRequest, ScheduleActionRequest, ScheduleActionResponse,
    SetSalesCloseTimeRequest, SetSimCardStatusRequest, SetStoreStatusRequest, SimCardStatus,
    Store, StorePage, StoreStatus, Sweep, SweepCounterparty, SweepPage, TerminalPage,
    TerminalSettings, UpdateAccountHolder, UpdateSplitConfigurationRequest,
    UpdateSplitConfigurationResponse, SWEEP_ACTIVE,
};
use super::Api;
use crate::config::{Endpoint, Endpoints};
use crate::error::{Error, Result};

const API_KEY_HEADER: &str = "x-API-key";

/// Blocking HTTP client bound to one environment's endpoints.
/// The underlying `reqwest` client is shared and pools connections; the
/// processors never issue overlapping requests.
pub struct Client {
    http: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl Client {
    pub fn new(http: reqwest::blocking::Client, endpoints: Endpoints) -> Self {
        Client { http, endpoints }
    }

    fn request(&self, method: Method, endpoint: &Endpoint, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("https://{}{}", endpoint.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &endpoint.api_key)
    }

    /// Run the request and return the raw success body.
    fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "platform call failed");
            return Err(decode_error(status.as_u16(), body));
        }
        Ok(body)
    }

    fn get<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<R> {
        let body = self.execute(self.request(Method::GET, endpoint, path).query(query))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn send<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        path: &str,
        payload: &B,
    ) -> Result<R> {
        let body = self.execute(self.request(method, endpoint, path).json(payload))?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn decode_error(status: u16, body: String) -> Error {
    match serde_json::from_str::<ApiError>(&body) {
        Ok(api) if !api.title.is_empty() || api.status != 0 => Error::Api(api),
        _ => Error::Status { status, body },
    }
}

impl Api for Client {
    fn account_holder(&self, code: &str) -> Result<AccountHolder> {
        info!(account_holder_code = code, ">> get account holder");
        let holder: AccountHolder = self.send(
            Method::POST,
            &self.endpoints.cal,
            "/cal/services/Account/v6/getAccountHolder",
            &AccountHolderRequest {
                account_holder_code: code.to_string(),
            },
        )?;
        info!(account_holder_code = code, response = ?holder, "<< get account holder");
        Ok(holder)
    }

    fn update_account_holder(&self, holder: &UpdateAccountHolder) -> Result<()> {
        info!(request = ?holder, ">> update account holder");
        let updated: AccountHolder = self.send(
            Method::POST,
            &self.endpoints.cal,
            "/cal/services/Account/v6/updateAccountHolder",
            holder,
        )?;
        info!(response = ?updated, "<< update account holder");
        Ok(())
    }

    fn close_account_holder(&self, code: &str) -> Result<()> {
        info!(account_holder_code = code, ">> close account holder");
        let closed: CloseAccountHolderResponse = self.send(
            Method::POST,
            &self.endpoints.cal,
            "/cal/services/Account/v6/closeAccountHolder",
            &AccountHolderRequest {
                account_holder_code: code.to_string(),
            },
        )?;
        info!(account_holder_code = code, response = ?closed, "<< close account holder");
        Ok(())
    }

    fn update_split_configuration(
        &self,
        merchant_id: &str,
        store_id: &str,
        request: &UpdateSplitConfigurationRequest,
    ) -> Result<()> {
        info!(merchant_id, store_id, request = ?request, ">> update split configuration");
        let updated: UpdateSplitConfigurationResponse = self.send(
            Method::PATCH,
            &self.endpoints.mgmt,
            &format!("/v1/merchants/{merchant_id}/stores/{store_id}"),
            request,
        )?;
        info!(merchant_id, store_id, response = ?updated, "<< update split configuration");
        Ok(())
    }

    fn search_stores(&self, reference: &str) -> Result<StorePage> {
        info!(reference, ">> search stores");
        let stores: StorePage = self.get(
            &self.endpoints.mgmt,
            "/v3/stores",
            &[("reference", reference)],
        )?;
        info!(reference, response = ?stores, "<< search stores");
        Ok(stores)
    }

    fn set_store_status(&self, store_id: &str, status: StoreStatus) -> Result<()> {
        info!(store_id, %status, ">> set store status");
        let store: Store = self.send(
            Method::PATCH,
            &self.endpoints.mgmt,
            &format!("/v1/stores/{store_id}"),
            &SetStoreStatusRequest { status },
        )?;
        info!(store_id, %status, response = ?store, "<< set store status");
        Ok(())
    }

    fn add_payment_method(
        &self,
        merchant_id: &str,
        store_id: &str,
        business_line_id: &str,
        method: &str,
        currency: &str,
    ) -> Result<PaymentMethodSettings> {
        info!(merchant_id, store_id, business_line_id, method, currency, ">> add payment method");
        let settings: PaymentMethodSettings = self.send(
            Method::POST,
            &self.endpoints.mgmt,
            &format!("/v3/merchants/{merchant_id}/paymentMethodSettings"),
            &AddPaymentMethodRequest {
                method_type: method.to_string(),
                business_line_id: business_line_id.to_string(),
                store_ids: vec![store_id.to_string()],
                currencies: vec![currency.to_string()],
            },
        )?;
        info!(merchant_id, store_id, method, response = ?settings, "<< add payment method");
        Ok(settings)
    }

    fn balance_account(&self, balance_id: &str) -> Result<BalanceAccount> {
        info!(balance_id, ">> get balance account");
        let account: BalanceAccount = self.get(
            &self.endpoints.bal,
            &format!("/bcl/v2/balanceAccounts/{balance_id}"),
            &[],
        )?;
        info!(balance_id, response = ?account, "<< get balance account");
        Ok(account)
    }

    fn balance_account_holder(&self, account_holder_id: &str) -> Result<BalanceAccountHolder> {
        info!(account_holder_id, ">> get balance account holder");
        let holder: BalanceAccountHolder = self.get(
            &self.endpoints.bal,
            &format!("/bcl/v2/accountHolders/{account_holder_id}"),
            &[],
        )?;
        info!(account_holder_id, response = ?holder, "<< get balance account holder");
        Ok(holder)
    }

    fn legal_entity(&self, legal_entity_id: &str) -> Result<LegalEntity> {
        info!(legal_entity_id, ">> get legal entity");
        let entity: LegalEntity = self.get(
            &self.endpoints.kyc,
            &format!("/lem/v3/legalEntities/{legal_entity_id}"),
            &[],
        )?;
        info!(legal_entity_id, response = ?entity, "<< get legal entity");
        Ok(entity)
    }

    fn sweeps(&self, balance_id: &str) -> Result<SweepPage> {
        info!(balance_id, ">> get sweeps");
        let sweeps: SweepPage = self.get(
            &self.endpoints.bal,
            &format!("/bcl/v2/balanceAccounts/{balance_id}/sweeps"),
            &[],
        )?;
        info!(balance_id, response = ?sweeps, "<< get sweeps");
        Ok(sweeps)
    }

    fn update_sweep(
        &self,
        balance_id: &str,
        sweep_id: &str,
        transfer_instrument_id: &str,
    ) -> Result<Sweep> {
        info!(balance_id, sweep_id, transfer_instrument_id, ">> update sweep");
        let sweep: Sweep = self.send(
            Method::PATCH,
            &self.endpoints.bal,
            &format!("/bcl/v2/balanceAccounts/{balance_id}/sweeps/{sweep_id}"),
            &super::types::UpdateSweepRequest {
                counterparty: SweepCounterparty {
                    transfer_instrument_id: Some(transfer_instrument_id.to_string()),
                    balance_account_id: None,
                },
                status: SWEEP_ACTIVE.to_string(),
            },
        )?;
        info!(balance_id, sweep_id, response = ?sweep, "<< update sweep");
        Ok(sweep)
    }

    fn set_sales_close_time(
        &self,
        balance_id: &str,
        closing_time: &str,
        delay_days: u32,
    ) -> Result<BalanceAccount> {
        info!(balance_id, closing_time, delay_days, ">> set sales close time");
        let account: BalanceAccount = self.send(
            Method::PATCH,
            &self.endpoints.bal,
            &format!("/bcl/v2/balanceAccounts/{balance_id}"),
            &SetSalesCloseTimeRequest {
                platform_payment_configuration: PlatformPaymentConfiguration {
                    sales_day_closing_time: closing_time.to_string(),
                    settlement_delay_days: delay_days,
                },
            },
        )?;
        info!(balance_id, response = ?account, "<< set sales close time");
        Ok(account)
    }

    fn reassign_terminal(
        &self,
        terminal_id: &str,
        merchant_id: &str,
        store_id: &str,
    ) -> Result<()> {
        info!(terminal_id, merchant_id, store_id, ">> reassign terminal");
        let request = if !store_id.is_empty() {
            ReassignTerminalRequest {
                store_id: Some(store_id.to_string()),
                ..Default::default()
            }
        } else if !merchant_id.is_empty() {
            ReassignTerminalRequest {
                merchant_id: Some(merchant_id.to_string()),
                inventory: Some(true),
                ..Default::default()
            }
        } else {
            return Err(Error::NoAssignmentTarget {
                terminal_id: terminal_id.to_string(),
            });
        };

        // The reassignment endpoint returns an empty body on success.
        self.execute(
            self.request(
                Method::POST,
                &self.endpoints.mgmt,
                &format!("/v3/terminals/{terminal_id}/reassign"),
            )
            .json(&request),
        )?;
        info!(terminal_id, merchant_id, store_id, "<< reassign terminal");
        Ok(())
    }

    fn terminal_settings(&self, terminal_id: &str) -> Result<TerminalSettings> {
        info!(terminal_id, ">> get terminal settings");
        let settings: TerminalSettings = self.get(
            &self.endpoints.mgmt,
            &format!("/v3/terminals/{terminal_id}/terminalSettings"),
            &[],
        )?;
        info!(terminal_id, response = ?settings, "<< get terminal settings");
        Ok(settings)
    }

    fn set_sim_card_status(&self, terminal_id: &str, disable: bool) -> Result<()> {
        info!(terminal_id, disable, ">> set sim card status");
        let status = if disable {
            SimCardStatus::Inventory
        } else {
            SimCardStatus::Activated
        };
        let updated: TerminalSettings = self.send(
            Method::PATCH,
            &self.endpoints.mgmt,
            &format!("/v3/terminals/{terminal_id}/terminalSettings"),
            &SetSimCardStatusRequest {
                connectivity: ConnectivityUpdate {
                    simcard_status: status,
                },
            },
        )?;
        info!(terminal_id, disable, response = ?updated, "<< set sim card status");
        Ok(())
    }

    fn disable_offline_payments(
        &self,
        terminal_id: &str,
        update: &OfflinePaymentsUpdate,
    ) -> Result<()> {
        info!(terminal_id, update = ?update, ">> disable offline payments");
        let updated: TerminalSettings = self.send(
            Method::PATCH,
            &self.endpoints.mgmt,
            &format!("/v3/terminals/{terminal_id}/terminalSettings"),
            update,
        )?;
        info!(terminal_id, response = ?updated, "<< disable offline payments");
        Ok(())
    }

    fn search_terminals(&self, store_id: &str, query: &str) -> Result<TerminalPage> {
        info!(store_id, query, ">> search terminals");
        let terminals: TerminalPage = self.get(
            &self.endpoints.mgmt,
            "/v3/terminals",
            &[
                ("storeIds", store_id),
                ("searchQuery", query),
                ("pageSize", "100"),
            ],
        )?;
        info!(store_id, query, response = ?terminals, "<< search terminals");
        Ok(terminals)
    }

    fn search_android_apps(&self, company_id: &str, package_name: &str) -> Result<AndroidAppPage> {
        info!(company_id, package_name, ">> search android apps");
        let apps: AndroidAppPage = self.get(
            &self.endpoints.mgmt,
            &format!("/v3/companies/{company_id}/androidApps"),
            &[("packageName", package_name)],
        )?;
        info!(company_id, package_name, response = ?apps, "<< search android apps");
        Ok(apps)
    }

    fn install_android_app(
        &self,
        app_id: &str,
        store_id: &str,
        terminal_ids: &[String],
        scheduled_at: &str,
    ) -> Result<()> {
        info!(app_id, store_id, ?terminal_ids, scheduled_at, ">> install android app");
        let scheduled: ScheduleActionResponse = self.send(
            Method::POST,
            &self.endpoints.mgmt,
            "/v3/terminals/scheduleActions",
            &ScheduleActionRequest {
                terminal_ids: terminal_ids.to_vec(),
                store_id: if store_id.is_empty() {
                    None
                } else {
                    Some(store_id.to_string())
                },
                scheduled_at: scheduled_at.to_string(),
                action_details: ActionDetails {
                    action_type: "InstallAndroidApp".to_string(),
                    app_id: app_id.to_string(),
                },
            },
        )?;
        info!(app_id, ?terminal_ids, response = ?scheduled, "<< install android app");
        Ok(())
    }
}
