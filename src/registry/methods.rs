//! The method table: required fields and parameter assembly per method.

use super::fields::{Field, FormData};
use crate::utils::error::FormError;
use serde_json::{Map, Value};

/// Every RPC method the probe knows how to issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    EthAccounts,
    EthBlockNumber,
    EthCall,
    EthChainId,
    EthEstimateGas,
    EthGasPrice,
    EthGetBalance,
    EthGetBlockByHash,
    EthGetBlockByNumber,
    EthGetCode,
    EthGetStorageAt,
    EthGetTransactionCount,
    EthMaxPriorityFeePerGas,
    EthSendRawTransaction,
    EthSendTransaction,
    NetVersion,
}

/// Registry order, as shown in method listings
pub const ALL_METHODS: &[Method] = &[
    Method::EthAccounts,
    Method::EthBlockNumber,
    Method::EthCall,
    Method::EthChainId,
    Method::EthEstimateGas,
    Method::EthGasPrice,
    Method::EthGetBalance,
    Method::EthGetBlockByHash,
    Method::EthGetBlockByNumber,
    Method::EthGetCode,
    Method::EthGetStorageAt,
    Method::EthGetTransactionCount,
    Method::EthMaxPriorityFeePerGas,
    Method::EthSendRawTransaction,
    Method::EthSendTransaction,
    Method::NetVersion,
];

impl Method {
    /// Wire name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Self::EthAccounts => "eth_accounts",
            Self::EthBlockNumber => "eth_blockNumber",
            Self::EthCall => "eth_call",
            Self::EthChainId => "eth_chainId",
            Self::EthEstimateGas => "eth_estimateGas",
            Self::EthGasPrice => "eth_gasPrice",
            Self::EthGetBalance => "eth_getBalance",
            Self::EthGetBlockByHash => "eth_getBlockByHash",
            Self::EthGetBlockByNumber => "eth_getBlockByNumber",
            Self::EthGetCode => "eth_getCode",
            Self::EthGetStorageAt => "eth_getStorageAt",
            Self::EthGetTransactionCount => "eth_getTransactionCount",
            Self::EthMaxPriorityFeePerGas => "eth_maxPriorityFeePerGas",
            Self::EthSendRawTransaction => "eth_sendRawTransaction",
            Self::EthSendTransaction => "eth_sendTransaction",
            Self::NetVersion => "net_version",
        }
    }

    /// Look a method up by its wire name
    pub fn parse(name: &str) -> Result<Self, FormError> {
        ALL_METHODS
            .iter()
            .find(|method| method.name() == name)
            .copied()
            .ok_or_else(|| FormError::UnknownMethod(name.to_string()))
    }

    /// Form fields this method reads
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::EthAccounts
            | Self::EthBlockNumber
            | Self::EthChainId
            | Self::EthGasPrice
            | Self::EthMaxPriorityFeePerGas
            | Self::NetVersion => &[],
            Self::EthCall => &[
                Field::Address,
                Field::RecipientAddress,
                Field::EncodedCall,
                Field::BlockValue,
            ],
            Self::EthEstimateGas => {
                &[Field::Address, Field::RecipientAddress, Field::EncodedCall]
            }
            Self::EthGetBalance
            | Self::EthGetCode
            | Self::EthGetTransactionCount => &[Field::Address, Field::BlockValue],
            Self::EthGetBlockByHash => &[Field::BlockHash, Field::ShowFullTransactions],
            Self::EthGetBlockByNumber => &[Field::BlockValue, Field::ShowFullTransactions],
            Self::EthGetStorageAt => {
                &[Field::Address, Field::StorageKey, Field::BlockValue]
            }
            Self::EthSendRawTransaction => &[Field::CallData],
            Self::EthSendTransaction => &[
                Field::Address,
                Field::RecipientAddress,
                Field::GasLimit,
                Field::GasPrice,
                Field::Value,
                Field::InputData,
                Field::Nonce,
            ],
        }
    }

    /// Assemble the JSON-RPC parameter list from the current form
    ///
    /// **Public** - called by the call and console commands
    ///
    /// # Errors
    /// * `FormError::MissingField` - a required field is empty
    pub fn build_params(&self, form: &FormData) -> Result<Vec<Value>, FormError> {
        let params = match self {
            Self::EthAccounts
            | Self::EthBlockNumber
            | Self::EthChainId
            | Self::EthGasPrice
            | Self::EthMaxPriorityFeePerGas
            | Self::NetVersion => vec![],

            Self::EthCall => {
                let call = build_call_object(form)?;
                vec![Value::Object(call), Value::String(form.block_value.clone())]
            }

            Self::EthEstimateGas => {
                let call = build_call_object(form)?;
                vec![Value::Object(call)]
            }

            Self::EthGetBalance | Self::EthGetCode | Self::EthGetTransactionCount => {
                let address = require(&form.address, Field::Address)?;
                vec![
                    Value::String(address.to_string()),
                    Value::String(form.block_value.clone()),
                ]
            }

            Self::EthGetBlockByHash => {
                let hash = require(&form.block_hash, Field::BlockHash)?;
                vec![
                    Value::String(hash.to_string()),
                    Value::Bool(form.show_full_transactions),
                ]
            }

            Self::EthGetBlockByNumber => vec![
                Value::String(form.block_value.clone()),
                Value::Bool(form.show_full_transactions),
            ],

            Self::EthGetStorageAt => {
                let address = require(&form.address, Field::Address)?;
                let key = require(&form.storage_key, Field::StorageKey)?;
                vec![
                    Value::String(address.to_string()),
                    Value::String(key.to_string()),
                    Value::String(form.block_value.clone()),
                ]
            }

            Self::EthSendRawTransaction => {
                let data = require(&form.call_data, Field::CallData)?;
                vec![Value::String(data.to_string())]
            }

            Self::EthSendTransaction => {
                let tx = build_transaction_object(form)?;
                vec![Value::Object(tx)]
            }
        };

        Ok(params)
    }
}

/// Check that a required field is non-empty
fn require<'a>(value: &'a str, field: Field) -> Result<&'a str, FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field.label()))
    } else {
        Ok(value)
    }
}

/// Call object for eth_call / eth_estimateGas; `from` only when set
fn build_call_object(form: &FormData) -> Result<Map<String, Value>, FormError> {
    let to = require(&form.recipient_address, Field::RecipientAddress)?;

    let mut call = Map::new();
    call.insert("to".to_string(), Value::String(to.to_string()));
    call.insert(
        "data".to_string(),
        Value::String(form.encoded_call.clone()),
    );
    if !form.address.is_empty() {
        call.insert("from".to_string(), Value::String(form.address.clone()));
    }

    Ok(call)
}

/// Transaction object for eth_sendTransaction; optional fields are
/// omitted entirely when empty, matching what nodes expect
fn build_transaction_object(form: &FormData) -> Result<Map<String, Value>, FormError> {
    let from = require(&form.address, Field::Address)?;

    let mut tx = Map::new();
    tx.insert("from".to_string(), Value::String(from.to_string()));

    let optional = [
        ("to", &form.recipient_address),
        ("gas", &form.gas_limit),
        ("gasPrice", &form.gas_price),
        ("value", &form.value),
        ("data", &form.input_data),
        ("nonce", &form.nonce),
    ];
    for (key, value) in optional {
        if !value.is_empty() {
            tx.insert(key.to_string(), Value::String(value.clone()));
        }
    }

    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(Method::parse("eth_chainId").unwrap(), Method::EthChainId);
        assert!(matches!(
            Method::parse("eth_bogus"),
            Err(FormError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_parameterless_methods() {
        let form = FormData::default();
        for method in [Method::EthAccounts, Method::EthBlockNumber, Method::NetVersion] {
            assert!(method.build_params(&form).unwrap().is_empty());
            assert!(method.fields().is_empty());
        }
    }

    #[test]
    fn test_get_balance_requires_address() {
        let mut form = FormData::default();
        assert!(matches!(
            Method::EthGetBalance.build_params(&form),
            Err(FormError::MissingField("Address"))
        ));

        form.address = "0xabc".to_string();
        let params = Method::EthGetBalance.build_params(&form).unwrap();
        assert_eq!(params, vec![json!("0xabc"), json!("latest")]);
    }

    #[test]
    fn test_call_object_from_is_optional() {
        let mut form = FormData {
            recipient_address: "0xdead".to_string(),
            encoded_call: "0x01".to_string(),
            ..FormData::default()
        };

        let params = Method::EthCall.build_params(&form).unwrap();
        assert_eq!(
            params,
            vec![json!({ "to": "0xdead", "data": "0x01" }), json!("latest")]
        );

        form.address = "0xbeef".to_string();
        let params = Method::EthCall.build_params(&form).unwrap();
        assert_eq!(
            params[0],
            json!({ "to": "0xdead", "data": "0x01", "from": "0xbeef" })
        );
    }

    #[test]
    fn test_estimate_gas_takes_only_call_object() {
        let form = FormData {
            recipient_address: "0xdead".to_string(),
            ..FormData::default()
        };
        let params = Method::EthEstimateGas.build_params(&form).unwrap();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_block_queries() {
        let mut form = FormData::default();
        form.show_full_transactions = true;

        let params = Method::EthGetBlockByNumber.build_params(&form).unwrap();
        assert_eq!(params, vec![json!("latest"), json!(true)]);

        assert!(Method::EthGetBlockByHash.build_params(&form).is_err());
        form.block_hash = "0xfeed".to_string();
        let params = Method::EthGetBlockByHash.build_params(&form).unwrap();
        assert_eq!(params, vec![json!("0xfeed"), json!(true)]);
    }

    #[test]
    fn test_get_storage_at_requires_key() {
        let mut form = FormData {
            address: "0xabc".to_string(),
            ..FormData::default()
        };
        assert!(matches!(
            Method::EthGetStorageAt.build_params(&form),
            Err(FormError::MissingField("Storage Key"))
        ));

        form.storage_key = "0x0".to_string();
        let params = Method::EthGetStorageAt.build_params(&form).unwrap();
        assert_eq!(params, vec![json!("0xabc"), json!("0x0"), json!("latest")]);
    }

    #[test]
    fn test_send_raw_transaction() {
        let form = FormData::default();
        assert!(Method::EthSendRawTransaction.build_params(&form).is_err());

        let form = FormData {
            call_data: "0xf86c...".to_string(),
            ..FormData::default()
        };
        let params = Method::EthSendRawTransaction.build_params(&form).unwrap();
        assert_eq!(params, vec![json!("0xf86c...")]);
    }

    #[test]
    fn test_send_transaction_assembly() {
        let form = FormData {
            address: "0xfrom".to_string(),
            recipient_address: "0xto".to_string(),
            nonce: "0x1".to_string(),
            ..FormData::default()
        };

        let params = Method::EthSendTransaction.build_params(&form).unwrap();
        // gas and value come from form defaults; gasPrice and data stay unset
        assert_eq!(
            params,
            vec![json!({
                "from": "0xfrom",
                "to": "0xto",
                "gas": "90000",
                "value": "0",
                "nonce": "0x1"
            })]
        );
    }

    #[test]
    fn test_every_method_has_registry_entry() {
        assert_eq!(ALL_METHODS.len(), 16);
        for method in ALL_METHODS {
            // Name and lookup agree
            assert_eq!(Method::parse(method.name()).unwrap(), *method);
        }
    }
}
