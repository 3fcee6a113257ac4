//! # CLI Flow
//!
//! Drives the `airdrop` command handlers through a full deployment using
//! files in a temporary directory: build the distribution, deploy, claim,
//! rotate, withdraw, and read status back.

use std::path::Path;

use airdrop_cli::admin::{run_update_root, run_withdraw, UpdateRootArgs, WithdrawArgs};
use airdrop_cli::claim::{run_claim, ClaimArgs};
use airdrop_cli::deploy::{run_deploy, DeployArgs};
use airdrop_cli::state;
use airdrop_cli::status::{run_status, StatusArgs};
use airdrop_cli::tree::{load_distribution, run_tree, TreeArgs, TreeCommand};
use airdrop_cli::verify::{run_verify, VerifyArgs};
use airdrop_core::{Address, Amount, NodeHash};
use airdrop_ledger::{ClaimStatus, TokenLedger};

const OWNER: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const VAULT: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
const ADDR1: &str = "0x1111111111111111111111111111111111111111";
const ADDR2: &str = "0x2222222222222222222222222222222222222222";

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

fn write_config(dir: &Path, root: NodeHash) -> std::path::PathBuf {
    let path = dir.join("deployment.yaml");
    let yaml = format!(
        "admin: \"{OWNER}\"\n\
         vault: \"{VAULT}\"\n\
         initial_root: \"{root}\"\n\
         token:\n\
         \x20 name: TestToken\n\
         \x20 symbol: TTK\n\
         \x20 initial_supply: \"1000\"\n\
         \x20 deployer: \"{OWNER}\"\n\
         funding: \"300\"\n"
    );
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn full_deployment_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let allowlist = dir.path().join("allowlist.csv");
    let dist_path = dir.path().join("distribution.json");
    let state_path = dir.path().join("airdrop-state.json");
    std::fs::write(
        &allowlist,
        format!("# round one\naddress,amount\n{ADDR1},100\n{ADDR2},200\n"),
    )
    .unwrap();

    // tree build
    let build = TreeArgs {
        command: TreeCommand::Build {
            input: allowlist,
            out: Some(dist_path.clone()),
        },
    };
    assert_eq!(run_tree(&build).unwrap(), 0);
    let dist = load_distribution(&dist_path).unwrap();

    // verify, without a ledger
    let entry = dist.entry_for(&addr(ADDR2)).unwrap();
    let verify = VerifyArgs {
        root: dist.root,
        address: entry.address,
        amount: entry.amount,
        proof: entry.proof.clone(),
    };
    assert_eq!(run_verify(&verify).unwrap(), 0);

    // deploy
    let deploy = DeployArgs {
        config: write_config(dir.path(), dist.root),
        force: false,
    };
    assert_eq!(run_deploy(&deploy, &state_path).unwrap(), 0);

    // claim by addr1 via the distribution; then again
    let claim = ClaimArgs {
        caller: addr(ADDR1),
        amount: Amount::new(100),
        proof: None,
        distribution: Some(dist_path.clone()),
    };
    assert_eq!(run_claim(&claim, &state_path).unwrap(), 0);
    assert_eq!(run_claim(&claim, &state_path).unwrap(), 1);

    // non-admin and admin root rotation
    let rogue = UpdateRootArgs {
        caller: addr(ADDR2),
        root: NodeHash::new([0x42; 32]),
    };
    assert_eq!(run_update_root(&rogue, &state_path).unwrap(), 1);
    let rotate = UpdateRootArgs {
        caller: addr(OWNER),
        root: NodeHash::new([0x42; 32]),
    };
    assert_eq!(run_update_root(&rotate, &state_path).unwrap(), 0);

    // addr2's proof was for the old root
    let late = ClaimArgs {
        caller: addr(ADDR2),
        amount: Amount::new(200),
        proof: Some(entry.proof.clone()),
        distribution: None,
    };
    assert_eq!(run_claim(&late, &state_path).unwrap(), 1);

    // admin withdraws the remainder
    let withdraw = WithdrawArgs {
        caller: addr(OWNER),
        amount: Amount::new(200),
    };
    assert_eq!(run_withdraw(&withdraw, &state_path).unwrap(), 0);

    let status = StatusArgs {
        address: Some(addr(ADDR1)),
        events: false,
    };
    assert_eq!(run_status(&status, &state_path).unwrap(), 0);

    let ledger = state::load(&state_path).unwrap();
    assert_eq!(ledger.status(&addr(ADDR1)), ClaimStatus::Claimed);
    assert_eq!(ledger.status(&addr(ADDR2)), ClaimStatus::Unclaimed);
    assert_eq!(ledger.current_root(), NodeHash::new([0x42; 32]));
    assert_eq!(ledger.vault_balance(), Amount::ZERO);
    assert_eq!(ledger.token().balance_of(&addr(OWNER)).get(), 900);
    assert_eq!(ledger.events().len(), 3);
}
