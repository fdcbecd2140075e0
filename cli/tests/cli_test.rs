use assert_cmd::Command;
use serde_json::Value;

fn eks_blueprint() -> Command {
    let mut cmd = Command::cargo_bin("eks-blueprint").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("AWS_ACCOUNT_ID")
        .env_remove("AWS_REGION");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn resolve_json() {
    let mut cmd = eks_blueprint();
    cmd.args(&["resolve", "--json", data::payments_path().to_str().unwrap()]);
    let resolved = stdout_json(&mut cmd);

    assert_eq!(resolved["blueprintId"], "payments-eks");
    assert_eq!(resolved["version"]["controlPlane"], "1.22");
    assert_eq!(resolved["version"]["coreDns"], "v1.8.7");
    assert_eq!(resolved["version"]["vpcCni"], "v1.11.4-eksbuild.1");
    let teams: Vec<&str> = resolved["teams"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(teams, vec!["platformteam", "team-a", "team-b"]);
    let add_ons: Vec<&str> = resolved["addOns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["kind"].as_str().unwrap())
        .collect();
    assert_eq!(add_ons, vec!["vpcCni", "secretsStore", "coreDns", "certManager"]);
}

#[test]
fn resolve_yaml() {
    let mut cmd = eks_blueprint();
    cmd.args(&["resolve", data::payments_path().to_str().unwrap()]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let resolved: Value = serde_yaml::from_slice(&output).unwrap();
    assert_eq!(resolved["clusterName"], "payments");
}

#[test]
fn resolve_with_overrides() {
    let mut cmd = eks_blueprint();
    cmd.args(&[
        "resolve",
        "--json",
        "--account",
        "444455556666",
        "--region",
        "eu-west-1",
        data::no_account_path().to_str().unwrap(),
    ]);
    let resolved = stdout_json(&mut cmd);
    assert_eq!(resolved["account"], "444455556666");
    assert_eq!(resolved["region"], "eu-west-1");
    // "9.9" is not supported so the default profile is used.
    assert_eq!(resolved["version"]["controlPlane"], "1.23");
    assert_eq!(
        resolved["teams"][0]["userRoleArn"],
        "arn:aws:iam::444455556666:role/Admin"
    );
}

#[test]
fn resolve_with_environment() {
    let mut cmd = eks_blueprint();
    cmd.env("AWS_ACCOUNT_ID", "777788889999")
        .env("AWS_REGION", "ap-south-1")
        .args(&["resolve", "--json", data::no_account_path().to_str().unwrap()]);
    let resolved = stdout_json(&mut cmd);
    assert_eq!(resolved["account"], "777788889999");
    assert_eq!(resolved["region"], "ap-south-1");
}

#[test]
fn resolve_missing_account() {
    let mut cmd = eks_blueprint();
    cmd.args(&["resolve", data::no_account_path().to_str().unwrap()]);
    let output = cmd.assert().failure().code(1).get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(
        stderr.contains("'account' is required but was empty"),
        "{}",
        stderr
    );
}

#[test]
fn resolve_invalid_file() {
    let mut cmd = eks_blueprint();
    cmd.args(&["resolve", data::invalid_path().to_str().unwrap()]);
    let output = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(
        stderr.contains("Unable to parse stack configuration"),
        "{}",
        stderr
    );
}

#[test]
fn resolve_missing_file() {
    let mut cmd = eks_blueprint();
    cmd.args(&["resolve", "does-not-exist.yaml"]);
    cmd.assert().failure();
}

#[test]
fn synth_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blueprint.json");
    let mut cmd = eks_blueprint();
    cmd.args(&[
        "synth",
        "--json",
        "--output",
        path.to_str().unwrap(),
        data::payments_path().to_str().unwrap(),
    ]);
    cmd.assert().success();

    let manifest: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(manifest["apiVersion"], "blueprint.eks.aws/v1");
    assert_eq!(manifest["kind"], "EksBlueprint");
    assert_eq!(manifest["metadata"]["name"], "payments-eks");
    assert_eq!(manifest["spec"]["network"]["vpcName"], "payments");
    assert_eq!(
        manifest["spec"]["teams"][2]["userRoleArn"],
        "arn:aws:iam::111122223333:role/payments-NSRoleteam-b"
    );
    assert_eq!(manifest["spec"]["teams"][2]["namespace"], "team-b");
    assert!(manifest["spec"]["teams"][0].get("namespace").is_none());
    assert_eq!(
        manifest["spec"]["clusterProvider"]["fargateProfiles"][0]["fargateProfileName"],
        "fargate"
    );
}

#[test]
fn synth_stdout() {
    let mut cmd = eks_blueprint();
    cmd.args(&["synth", "--json", data::payments_path().to_str().unwrap()]);
    let manifest = stdout_json(&mut cmd);
    assert_eq!(manifest["spec"]["addOns"].as_array().unwrap().len(), 4);
}

#[test]
fn synth_reports_resources_on_failure() {
    let mut cmd = eks_blueprint();
    cmd.args(&["synth", data::long_stack_path().to_str().unwrap()]);
    let output = cmd.assert().failure().code(1).get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("the failed step created nothing"), "{}", stderr);
    assert!(stderr.contains("is longer than 64 characters"), "{}", stderr);
}

#[test]
fn resolve_with_enabled_add_ons() {
    let mut cmd = eks_blueprint();
    cmd.args(&[
        "resolve",
        "--json",
        "--enable",
        "kubecost",
        "--enable",
        "metricsServer",
        data::payments_path().to_str().unwrap(),
    ]);
    let resolved = stdout_json(&mut cmd);
    let add_ons: Vec<&str> = resolved["addOns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        add_ons,
        vec!["vpcCni", "secretsStore", "coreDns", "certManager", "metricsServer", "kubecost"]
    );
}

#[test]
fn resolve_unknown_add_on() {
    let mut cmd = eks_blueprint();
    cmd.args(&["resolve", "--enable", "nginx", data::payments_path().to_str().unwrap()]);
    cmd.assert().failure();
}

#[test]
fn versions_json() {
    let mut cmd = eks_blueprint();
    cmd.args(&["versions", "--json"]);
    let versions = stdout_json(&mut cmd);
    let versions = versions.as_array().unwrap();
    assert_eq!(versions.len(), 3);
    assert_eq!(versions[0]["version"], "1.21");
    assert_eq!(versions[0]["coreDns"], "v1.8.4");
    assert_eq!(versions[2]["version"], "1.23");
    assert_eq!(versions[2]["default"], true);
    assert_eq!(versions[1]["default"], false);
}
