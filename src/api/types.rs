//! Wire types for the platform's REST services.
//!
//! These mirror the external JSON contract exactly; field-level renames keep
//! the platform's casing quirks (e.g. `splitConfigurationUUID`) out of the
//! Rust names. Optional fields stay `Option` with skip-if-none serialization
//! so "absent" and "empty string" remain distinct on the wire.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Classic account holders (CAL service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolderRequest {
    pub account_holder_code: String,
}

/// One store entry inside an account holder. The mutable fields are all
/// optional on the wire; `store_id` is the platform's external reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDetail {
    #[serde(
        rename = "splitConfigurationUUID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub split_configuration_uuid: Option<String>,
    #[serde(
        rename = "virtualAccount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "store")]
    pub store_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolderDetails {
    #[serde(default)]
    pub store_details: Vec<StoreDetail>,
}

/// Update payload for an account holder; also the mutable core of the
/// fetched entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountHolder {
    pub account_holder_code: String,
    #[serde(default)]
    pub account_holder_details: AccountHolderDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSchedule {
    #[serde(default)]
    pub schedule: String,
}

/// Server-assigned account attached to an account holder. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payout_schedule: PayoutSchedule,
    #[serde(default)]
    pub payout_speed: String,
    #[serde(default)]
    pub status: String,
}

/// Fetched account holder: the mutable update payload plus the read-only
/// account list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountHolder {
    #[serde(flatten)]
    pub update: UpdateAccountHolder,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolderStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub psp_reference: String,
    #[serde(default)]
    pub result_code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseAccountHolderResponse {
    #[serde(default)]
    pub account_holder_status: AccountHolderStatus,
}

// ---------------------------------------------------------------------------
// Stores and split configurations (MGMT service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfiguration {
    pub balance_account_id: String,
    pub split_configuration_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSplitConfigurationRequest {
    pub split_configuration: SplitConfiguration,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSplitConfigurationResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub split_configuration: SplitConfiguration,
}

/// A store as the management API reports it. `id` is the management ID used
/// in mutation paths; `reference` is the external store reference the CSV
/// files carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub business_line_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePage {
    #[serde(default)]
    pub items_total: u32,
    #[serde(default)]
    pub pages_total: u32,
    #[serde(default)]
    pub data: Vec<Store>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Active,
    Inactive,
    Closed,
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
            StoreStatus::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStoreStatusRequest {
    pub status: StoreStatus,
}

// ---------------------------------------------------------------------------
// Payment methods (MGMT service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentMethodRequest {
    #[serde(rename = "type")]
    pub method_type: String,
    pub business_line_id: String,
    pub store_ids: Vec<String>,
    pub currencies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSettings {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub method_type: String,
    #[serde(default)]
    pub store_ids: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

// ---------------------------------------------------------------------------
// Balance platform (BCL service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPaymentConfiguration {
    #[serde(default)]
    pub sales_day_closing_time: String,
    #[serde(default)]
    pub settlement_delay_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAccount {
    pub id: String,
    #[serde(default)]
    pub account_holder_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_payment_configuration: Option<PlatformPaymentConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAccountHolder {
    pub id: String,
    #[serde(default)]
    pub legal_entity_id: String,
    #[serde(default)]
    pub primary_balance_account: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSalesCloseTimeRequest {
    pub platform_payment_configuration: PlatformPaymentConfiguration,
}

// ---------------------------------------------------------------------------
// Legal entities (LEM service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInstrumentRef {
    pub id: String,
    #[serde(default)]
    pub account_identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntity {
    pub id: String,
    #[serde(rename = "type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub transfer_instruments: Vec<TransferInstrumentRef>,
}

// ---------------------------------------------------------------------------
// Sweeps (BCL service)
// ---------------------------------------------------------------------------

pub const SWEEP_ACTIVE: &str = "active";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepCounterparty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_instrument_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweep {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub counterparty: SweepCounterparty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPage {
    #[serde(default)]
    pub sweeps: Vec<Sweep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSweepRequest {
    pub counterparty: SweepCounterparty,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Terminals (MGMT service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTerminalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalPage {
    #[serde(default)]
    pub items_total: u32,
    #[serde(default)]
    pub pages_total: u32,
    #[serde(default)]
    pub data: Vec<Terminal>,
}

/// An amount in minor units with its currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorUnitAmount {
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub currency_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineProcessing {
    #[serde(default)]
    pub chip_floor_limit: u64,
    #[serde(default)]
    pub offline_swipe_limits: Vec<MinorUnitAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedCardTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deferred_debit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepaid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_pin: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAndForward {
    #[serde(default)]
    pub max_payments: u64,
    #[serde(default)]
    pub max_amount: Vec<MinorUnitAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_card_types: Option<SupportedCardTypes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    #[serde(default)]
    pub simcard_status: String,
}

/// Fetched terminal settings; only the substructures this tool touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSettings {
    #[serde(default)]
    pub offline_processing: OfflineProcessing,
    #[serde(default)]
    pub store_and_forward: StoreAndForward,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<Connectivity>,
}

/// PATCH payload that disables offline payments: only the two substructures
/// are sent, so no other settings are part of the update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflinePaymentsUpdate {
    pub offline_processing: OfflineProcessing,
    pub store_and_forward: StoreAndForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SimCardStatus {
    Activated,
    Inventory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityUpdate {
    pub simcard_status: SimCardStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSimCardStatusRequest {
    pub connectivity: ConnectivityUpdate,
}

// ---------------------------------------------------------------------------
// Android apps and scheduled actions (MGMT service)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidApp {
    pub id: String,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub version_name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidAppPage {
    #[serde(default)]
    pub data: Vec<AndroidApp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDetails {
    #[serde(rename = "type")]
    pub action_type: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleActionRequest {
    pub terminal_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    pub scheduled_at: String,
    pub action_details: ActionDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleActionResponse {
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub terminal_ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Structured platform errors
// ---------------------------------------------------------------------------

/// Error body the platform returns on non-success statuses, when it does.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub status: u16,
}
