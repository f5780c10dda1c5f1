use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["ships"], 5);
    assert_eq!(v["sunk"], 5);
    assert_eq!(v["hits"], 17);
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["42", "8"])
            .output()
            .expect("failed to run sim binary")
    };
    let a: serde_json::Value = serde_json::from_slice(&run().stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&run().stdout).unwrap();
    assert_eq!(a["shots"], b["shots"]);
    assert_eq!(a["size"], 8);
}
