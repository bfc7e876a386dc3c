use ledger_model::{LedgerError, RoutingTable};

const TABLE: &str = r#"
[[range]]
start = "AA"
end = "CZ"
group = "(A-C) Appleby"
email = "appleby@example.net"

[[range]]
start = "DA"
end = "HA"
group = "(D-Ha) Hewgley"
email = "hewgley@example.net"

[default]
group = "(Head Counselor) Matta"
email = "head@example.net"

[sender]
from = ["guajardo@example.net", "popp@example.net"]
signature = "Ms. Guajardo and Mrs. Popp"
"#;

#[test]
fn parses_from_toml() {
    let table: RoutingTable = toml::from_str(TABLE).expect("parse routing table");
    table.validate().expect("valid table");
    assert_eq!(table.ranges.len(), 2);
    assert_eq!(table.ranges[0].start, "AA");
    assert_eq!(table.ranges[1].group, "(D-Ha) Hewgley");
    assert_eq!(table.default_recipient().email, "head@example.net");
    assert_eq!(
        table.sender.from_header(),
        "guajardo@example.net, popp@example.net"
    );
}

#[test]
fn rejects_bad_bounds() {
    let mut table: RoutingTable = toml::from_str(TABLE).unwrap();
    table.ranges[0].start = "a".to_string();
    let error = table.validate().unwrap_err();
    assert!(matches!(error, LedgerError::Routing(_)));

    let mut table: RoutingTable = toml::from_str(TABLE).unwrap();
    table.ranges[0].start = "ZZ".to_string();
    assert!(table.validate().is_err(), "inverted range must not validate");
}

#[test]
fn rejects_empty_addresses() {
    let mut table: RoutingTable = toml::from_str(TABLE).unwrap();
    table.default.email = " ".to_string();
    assert!(table.validate().is_err());

    let mut table: RoutingTable = toml::from_str(TABLE).unwrap();
    table.sender.from.clear();
    assert!(table.validate().is_err());
}
