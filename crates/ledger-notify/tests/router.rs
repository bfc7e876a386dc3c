use ledger_notify::{Router, default_routing_table};

#[test]
fn routes_by_last_name_prefix() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);

    assert_eq!(
        router.route("Zapata, Maria").email,
        "samantha.pearson@nisd.net"
    );
    assert_eq!(router.route("Zapata, Maria").group, "(S-Z) Pearson");
    assert_eq!(
        router.route("Brown, Ana").email,
        "janelle.appleby@nisd.net"
    );
    assert_eq!(router.route("Ramirez, Joe").email, "darrell.clarke@nisd.net");
    assert_eq!(router.route("Hernandez, Kim").group, "(He-Mi) Ramos");
}

#[test]
fn boundaries_are_inclusive() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);

    assert_eq!(router.route("Aaron, Sam").group, "(A-C) Appleby");
    assert_eq!(router.route("Cruz, Sam").group, "(A-C) Appleby");
    assert_eq!(router.route("Dale, Sam").group, "(D-Ha) Hewgley");
    assert_eq!(router.route("Hays, Sam").group, "(D-Ha) Hewgley");
    assert_eq!(router.route("Hearn, Sam").group, "(He-Mi) Ramos");
    assert_eq!(router.route("Mixon, Sam").group, "(He-Mi) Ramos");
    assert_eq!(router.route("Moss, Sam").group, "(Mo-R) Clarke");
    assert_eq!(router.route("Ryan, Sam").group, "(Mo-R) Clarke");
    assert_eq!(router.route("Salas, Sam").group, "(S-Z) Pearson");
    assert_eq!(router.route("Zz, Sam").group, "(S-Z) Pearson");
}

#[test]
fn gap_between_ranges_falls_to_default() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);

    // HB-HD sits between the Hewgley and Ramos ranges on purpose.
    assert_eq!(router.route("Hb, Sam").group, "(Head Counselor) Matta");
    assert_eq!(router.route("Hdal, Sam").group, "(Head Counselor) Matta");
}

#[test]
fn case_and_whitespace_are_normalized() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);

    assert_eq!(router.route("  zapata , maria").group, "(S-Z) Pearson");
    assert_eq!(router.route("BROWN,ANA").group, "(A-C) Appleby");
}

#[test]
fn uppercase_expansion_never_widens_the_prefix() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);

    // 'ẚ' uppercases to "A" plus a modifier letter; only the "A" counts,
    // so the prefix is "HA" and stays inside the Hewgley range.
    assert_eq!(router.route("Hẚys, Sam").group, "(D-Ha) Hewgley");
    // 'ß' uppercases to "SS" and fills the whole prefix.
    assert_eq!(router.route("ßz, Sam").group, "(S-Z) Pearson");
}

#[test]
fn name_without_comma_uses_the_whole_name() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);

    assert_eq!(router.route("Zapata Maria").group, "(S-Z) Pearson");
}

#[test]
fn malformed_names_fall_to_default_without_error() {
    let table = default_routing_table().unwrap();
    let router = Router::new(&table);
    let fallback = "head.counselor@nisd.net";

    assert_eq!(router.route("").email, fallback);
    assert_eq!(router.route("   ").email, fallback);
    assert_eq!(router.route("Z").email, fallback);
    assert_eq!(router.route(", Maria").email, fallback);
    assert_eq!(router.route("42, Answer").email, fallback);
}
