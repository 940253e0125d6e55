use eth_rpc_probe::registry::{Field, FormData, Method, ALL_METHODS};
use eth_rpc_probe::utils::error::FormError;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_registry_is_complete() {
    let names: Vec<&str> = ALL_METHODS.iter().map(|m| m.name()).collect();
    assert_eq!(
        names,
        vec![
            "eth_accounts",
            "eth_blockNumber",
            "eth_call",
            "eth_chainId",
            "eth_estimateGas",
            "eth_gasPrice",
            "eth_getBalance",
            "eth_getBlockByHash",
            "eth_getBlockByNumber",
            "eth_getCode",
            "eth_getStorageAt",
            "eth_getTransactionCount",
            "eth_maxPriorityFeePerGas",
            "eth_sendRawTransaction",
            "eth_sendTransaction",
            "net_version",
        ]
    );
}

#[test]
fn test_parameterless_methods_ignore_form() {
    let form = FormData {
        address: "0xabc".to_string(),
        ..FormData::default()
    };
    assert!(Method::EthChainId.build_params(&form).unwrap().is_empty());
    assert!(Method::EthGasPrice.build_params(&form).unwrap().is_empty());
    assert!(Method::EthMaxPriorityFeePerGas
        .build_params(&form)
        .unwrap()
        .is_empty());
}

#[test]
fn test_eth_call_full_shape() {
    let form = FormData {
        address: "0xfrom".to_string(),
        recipient_address: "0xto".to_string(),
        encoded_call: "0xdeadbeef".to_string(),
        block_value: "pending".to_string(),
        ..FormData::default()
    };

    let params = Method::EthCall.build_params(&form).unwrap();
    assert_eq!(
        params,
        vec![
            json!({ "to": "0xto", "data": "0xdeadbeef", "from": "0xfrom" }),
            json!("pending"),
        ]
    );
}

#[test]
fn test_eth_call_missing_recipient() {
    let form = FormData::default();
    match Method::EthCall.build_params(&form) {
        Err(FormError::MissingField(label)) => assert_eq!(label, "Recipient Address"),
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_send_transaction_omits_empty_fields() {
    let form = FormData {
        address: "0xfrom".to_string(),
        gas_limit: String::new(),
        value: String::new(),
        ..FormData::default()
    };

    let params = Method::EthSendTransaction.build_params(&form).unwrap();
    assert_eq!(params, vec![json!({ "from": "0xfrom" })]);
}

#[test]
fn test_send_transaction_defaults_carry_through() {
    let form = FormData {
        address: "0xfrom".to_string(),
        ..FormData::default()
    };

    let params = Method::EthSendTransaction.build_params(&form).unwrap();
    assert_eq!(params, vec![json!({ "from": "0xfrom", "gas": "90000", "value": "0" })]);
}

#[test]
fn test_field_keys_parse_back() {
    for method in ALL_METHODS {
        for field in method.fields() {
            assert_eq!(Field::parse(field.key()).unwrap(), *field);
        }
    }
}

#[test]
fn test_form_set_by_parsed_field() {
    let mut form = FormData::default();
    form.set(Field::parse("storageKey").unwrap(), "0x0").unwrap();
    form.set(Field::parse("fullTransactions").unwrap(), "true")
        .unwrap();

    let params = {
        let form = FormData {
            address: "0xabc".to_string(),
            ..form
        };
        Method::EthGetStorageAt.build_params(&form).unwrap()
    };
    assert_eq!(params, vec![json!("0xabc"), json!("0x0"), json!("latest")]);
}
