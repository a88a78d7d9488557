use serde::{Deserialize, Serialize};

/// Envelope around a single account record, as the API sends and receives it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub data: Account,
}

/// Envelope around a page of account records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountList {
    pub data: Vec<Account>,
    #[serde(default)]
    pub links: PageLinks,
}

/// Links to paginated data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default, rename = "self")]
    pub this: String,
}

/// A registered bank account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub account_type: String,
    pub id: String,
    pub organisation_id: String,
    #[serde(default)]
    pub attributes: AccountAttributes,
}

/// Attributes of an account. Field names are part of the wire contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub base_currency: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub bank_id: String,
    #[serde(default)]
    pub bank_id_code: String,
    #[serde(default)]
    pub bic: String,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub bank_account_name: String,
    #[serde(default)]
    pub alternative_bank_account_names: Vec<String>,
    #[serde(default)]
    pub account_classification: String,
    #[serde(default)]
    pub joint_account: bool,
    #[serde(default)]
    pub account_matching_opt_out: bool,
    #[serde(default)]
    pub secondary_identification: String,
}
