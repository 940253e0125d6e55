//! Form fields and their current values.

use crate::utils::config::{DEFAULT_BLOCK_TAG, DEFAULT_GAS_LIMIT, DEFAULT_VALUE};
use crate::utils::error::FormError;

/// A single form input consumed by one or more RPC methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    BlockValue,
    BlockHash,
    ShowFullTransactions,
    RecipientAddress,
    EncodedCall,
    StorageKey,
    GasLimit,
    GasPrice,
    Value,
    InputData,
    Nonce,
    CallData,
}

/// All fields, in form display order
pub const ALL_FIELDS: &[Field] = &[
    Field::Address,
    Field::BlockValue,
    Field::BlockHash,
    Field::ShowFullTransactions,
    Field::RecipientAddress,
    Field::EncodedCall,
    Field::StorageKey,
    Field::GasLimit,
    Field::GasPrice,
    Field::Value,
    Field::InputData,
    Field::Nonce,
    Field::CallData,
];

impl Field {
    /// Stable key used on the command line and in the console
    pub fn key(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::BlockValue => "block",
            Self::BlockHash => "blockHash",
            Self::ShowFullTransactions => "fullTransactions",
            Self::RecipientAddress => "to",
            Self::EncodedCall => "data",
            Self::StorageKey => "storageKey",
            Self::GasLimit => "gas",
            Self::GasPrice => "gasPrice",
            Self::Value => "value",
            Self::InputData => "input",
            Self::Nonce => "nonce",
            Self::CallData => "rawTx",
        }
    }

    /// Human-readable label for help output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::BlockValue => "Block Value",
            Self::BlockHash => "Block Hash",
            Self::ShowFullTransactions => "Show Full Transactions",
            Self::RecipientAddress => "Recipient Address",
            Self::EncodedCall => "Encoded Call Data",
            Self::StorageKey => "Storage Key",
            Self::GasLimit => "Gas Limit",
            Self::GasPrice => "Gas Price",
            Self::Value => "Value (Wei)",
            Self::InputData => "Input Data",
            Self::Nonce => "Nonce",
            Self::CallData => "Raw Transaction Data",
        }
    }

    /// Example value shown next to the field
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::GasLimit => Some(DEFAULT_GAS_LIMIT),
            Self::Value => Some(DEFAULT_VALUE),
            Self::BlockValue | Self::ShowFullTransactions => None,
            _ => Some("0x..."),
        }
    }

    /// Suggested values, for fields that behave like a select box
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::BlockValue => Some(&["latest", "earliest", "pending", "0x1"]),
            Self::ShowFullTransactions => Some(&["true", "false"]),
            _ => None,
        }
    }

    /// Look a field up by its key
    pub fn parse(key: &str) -> Result<Self, FormError> {
        ALL_FIELDS
            .iter()
            .find(|field| field.key() == key)
            .copied()
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }
}

/// Current values of the parameter form
///
/// Empty strings mean "not set"; required-field checks in the registry
/// treat them as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub address: String,
    pub block_value: String,
    pub block_hash: String,
    pub show_full_transactions: bool,
    pub recipient_address: String,
    pub encoded_call: String,
    pub storage_key: String,
    pub gas_limit: String,
    pub gas_price: String,
    pub value: String,
    pub input_data: String,
    pub nonce: String,
    pub call_data: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            address: String::new(),
            block_value: DEFAULT_BLOCK_TAG.to_string(),
            block_hash: String::new(),
            show_full_transactions: false,
            recipient_address: String::new(),
            encoded_call: String::new(),
            storage_key: String::new(),
            gas_limit: DEFAULT_GAS_LIMIT.to_string(),
            gas_price: String::new(),
            value: DEFAULT_VALUE.to_string(),
            input_data: String::new(),
            nonce: String::new(),
            call_data: String::new(),
        }
    }
}

impl FormData {
    /// Current value of a field, rendered as text
    pub fn display(&self, field: Field) -> String {
        match field {
            Field::Address => self.address.clone(),
            Field::BlockValue => self.block_value.clone(),
            Field::BlockHash => self.block_hash.clone(),
            Field::ShowFullTransactions => self.show_full_transactions.to_string(),
            Field::RecipientAddress => self.recipient_address.clone(),
            Field::EncodedCall => self.encoded_call.clone(),
            Field::StorageKey => self.storage_key.clone(),
            Field::GasLimit => self.gas_limit.clone(),
            Field::GasPrice => self.gas_price.clone(),
            Field::Value => self.value.clone(),
            Field::InputData => self.input_data.clone(),
            Field::Nonce => self.nonce.clone(),
            Field::CallData => self.call_data.clone(),
        }
    }

    /// Set a field from raw console/CLI input
    ///
    /// # Errors
    /// * `FormError::InvalidFlag` - checkbox field given a non-boolean
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), FormError> {
        match field {
            Field::Address => self.address = raw.to_string(),
            Field::BlockValue => self.block_value = raw.to_string(),
            Field::BlockHash => self.block_hash = raw.to_string(),
            Field::ShowFullTransactions => {
                self.show_full_transactions = raw
                    .parse()
                    .map_err(|_| FormError::InvalidFlag(field.label()))?;
            }
            Field::RecipientAddress => self.recipient_address = raw.to_string(),
            Field::EncodedCall => self.encoded_call = raw.to_string(),
            Field::StorageKey => self.storage_key = raw.to_string(),
            Field::GasLimit => self.gas_limit = raw.to_string(),
            Field::GasPrice => self.gas_price = raw.to_string(),
            Field::Value => self.value = raw.to_string(),
            Field::InputData => self.input_data = raw.to_string(),
            Field::Nonce => self.nonce = raw.to_string(),
            Field::CallData => self.call_data = raw.to_string(),
        }
        Ok(())
    }
}
