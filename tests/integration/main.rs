//! Integration tests for kosh
//!
//! Every test runs against its own vault and config in a temp
//! directory, passed through the global flags, so tests are free to run
//! in parallel.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::TempDir;

fn kosh(vault: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("kosh");
    cmd.arg("--vault").arg(vault.path().join("vault"));
    cmd.arg("--config").arg(vault.path().join("config.toml"));
    cmd
}

fn signup(vault: &TempDir) {
    kosh(vault)
        .args([
            "signup",
            "--name",
            "Asha Rao",
            "--email",
            "asha@example.com",
            "--mobile",
            "9876543210",
            "--pan",
            "ABCDE1234F",
            "--password",
            "hunter2!",
        ])
        .assert()
        .success();
}

mod cli_tests {
    use super::*;

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("kosh")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("KYC onboarding vault"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("kosh")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("kosh"));
    }

    #[test]
    fn completions_generate() {
        cargo_bin_cmd!("kosh")
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("kosh"));
    }

    #[test]
    fn status_runs_on_empty_vault() {
        let vault = TempDir::new().unwrap();
        kosh(&vault)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not registered"));
    }
}

mod signup_tests {
    use super::*;

    #[test]
    fn signup_then_profile() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        kosh(&vault)
            .args(["profile", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("asha@example.com"))
            .stdout(predicate::str::contains("ABCDE1234F"));

        kosh(&vault)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Registered as Asha Rao"));
    }

    #[test]
    fn signup_rejects_bad_pan() {
        let vault = TempDir::new().unwrap();
        kosh(&vault)
            .args([
                "signup",
                "--name",
                "Asha",
                "--email",
                "asha@example.com",
                "--mobile",
                "9876543210",
                "--pan",
                "bogus",
                "--password",
                "hunter2!",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("panCard"));
    }

    #[test]
    fn signup_twice_is_refused() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        kosh(&vault)
            .args([
                "signup",
                "--name",
                "Other",
                "--email",
                "other@example.com",
                "--mobile",
                "9000000000",
                "--pan",
                "ABCDE1234F",
                "--password",
                "hunter2!",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"))
            .stderr(predicate::str::contains("kosh reset"));
    }

    #[test]
    fn non_interactive_prompt_names_flag() {
        let vault = TempDir::new().unwrap();
        kosh(&vault)
            .arg("signup")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--name"));
    }

    #[test]
    fn profile_without_account_hints_signup() {
        let vault = TempDir::new().unwrap();
        kosh(&vault)
            .arg("profile")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No account found"))
            .stderr(predicate::str::contains("kosh signup"));
    }
}

mod verify_tests {
    use super::*;

    #[test]
    fn verify_mobile_and_email() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        kosh(&vault)
            .args(["verify", "mobile", "--code", "123456"])
            .assert()
            .success();

        kosh(&vault)
            .args(["verify", "email", "--code", "654321"])
            .assert()
            .success();

        kosh(&vault)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Mobile number verified"))
            .stdout(predicate::str::contains("Email address verified"));
    }

    #[test]
    fn malformed_code_is_rejected() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        kosh(&vault)
            .args(["verify", "mobile", "--code", "12345"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("6-digit"));
    }

    #[test]
    fn verify_without_account_fails() {
        let vault = TempDir::new().unwrap();
        kosh(&vault)
            .args(["verify", "mobile", "--code", "123456"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No account found"));
    }
}

mod document_tests {
    use super::*;

    fn write_image(vault: &TempDir, name: &str) -> std::path::PathBuf {
        let path = vault.path().join(name);
        std::fs::write(&path, name.as_bytes()).unwrap();
        path
    }

    #[test]
    fn attach_submit_flow() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        for (kind, file) in [("pan", "pan.jpg"), ("id-front", "front.jpg"), ("id-back", "back.jpg")]
        {
            let path = write_image(&vault, file);
            kosh(&vault)
                .args(["documents", "attach", kind])
                .arg(&path)
                .assert()
                .success();
        }

        kosh(&vault)
            .args(["documents", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pan.jpg"));

        kosh(&vault)
            .args(["documents", "submit"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Documents submitted"));

        kosh(&vault)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("3 of 3 attached"));
    }

    #[test]
    fn submit_with_missing_documents_fails() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        let path = write_image(&vault, "pan.jpg");
        kosh(&vault)
            .args(["documents", "attach", "pan"])
            .arg(&path)
            .assert()
            .success();

        kosh(&vault)
            .args(["documents", "submit"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not attached").or(predicate::str::contains(
                "Document not attached",
            )));
    }
}

mod details_tests {
    use super::*;

    const WIZARD_INPUT: &str = r#"{
        "identity": {
            "panNumber": "ABCDE1234F",
            "nameAsPerPan": "Asha Rao",
            "dateOfBirth": "1990-04-01",
            "email": "asha@example.com",
            "mobile": "9876543210",
            "gender": "Female"
        },
        "address": {
            "line1": "12 MG Road",
            "pinCode": "560001",
            "city": "Bengaluru",
            "state": "Karnataka"
        },
        "nominee": {
            "declared": true,
            "name": "Ravi Rao",
            "dateOfBirth": "2012-01-15",
            "relation": "Son",
            "age": "13"
        },
        "security": {
            "password": "wizard-pass",
            "confirmPassword": "wizard-pass"
        },
        "bank": {
            "ifscCode": "HDFC0001234",
            "accountNo": "123456789012",
            "accountType": "Savings",
            "bankName": "HDFC Bank",
            "branchName": "MG Road",
            "bankAddress": "MG Road, Bengaluru"
        }
    }"#;

    #[test]
    fn details_from_json_completes_profile() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        let input = vault.path().join("details.json");
        std::fs::write(&input, WIZARD_INPUT).unwrap();

        kosh(&vault)
            .args(["details", "--from-json"])
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Asha Rao"));

        kosh(&vault)
            .args(["profile", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("HDFC0001234"))
            .stdout(predicate::str::contains("Ravi Rao"));

        // The wizard rotated the password
        kosh(&vault)
            .args(["login", "--email", "asha@example.com", "--password", "wizard-pass"])
            .assert()
            .success();
    }

    #[test]
    fn details_rejects_invalid_input() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        let input = vault.path().join("details.json");
        std::fs::write(
            &input,
            WIZARD_INPUT.replace("ABCDE1234F", "lowercase1x"),
        )
        .unwrap();

        kosh(&vault)
            .args(["details", "--from-json"])
            .arg(&input)
            .assert()
            .failure()
            .stderr(predicate::str::contains("panNumber"));
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn login_logout_cycle() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        kosh(&vault)
            .args(["login", "--email", "asha@example.com", "--password", "wrong"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Incorrect email or password"));

        kosh(&vault)
            .args(["login", "--email", "asha@example.com", "--password", "hunter2!"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Welcome back"));

        kosh(&vault).arg("logout").assert().success();

        // Account is forgotten after logout
        kosh(&vault)
            .arg("profile")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No account found"));
    }

    #[test]
    fn reset_clears_everything() {
        let vault = TempDir::new().unwrap();
        signup(&vault);
        kosh(&vault)
            .args(["verify", "mobile", "--code", "123456"])
            .assert()
            .success();

        kosh(&vault)
            .args(["reset", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Vault cleared"));

        kosh(&vault)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Not registered"))
            .stdout(predicate::str::contains("not verified"));
    }
}

mod settings_tests {
    use super::*;

    #[test]
    fn set_and_show() {
        let vault = TempDir::new().unwrap();

        kosh(&vault)
            .args(["settings", "set", "theme", "dark"])
            .assert()
            .success();

        kosh(&vault)
            .args(["settings", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dark"));

        kosh(&vault)
            .args(["settings", "set", "theme", "blue"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid theme"));
    }
}

mod funds_tests {
    use super::*;

    #[test]
    fn listing_is_cached() {
        let vault = TempDir::new().unwrap();

        kosh(&vault)
            .args(["funds", "--category", "large-cap"])
            .assert()
            .success()
            .stdout(predicate::str::contains("HDFC Top 100 Fund"));

        kosh(&vault)
            .args(["cache", "stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("funds:large-cap"))
            .stdout(predicate::str::contains("valid"));

        kosh(&vault)
            .args(["cache", "clear"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cleared 1 cache entries"));

        kosh(&vault)
            .args(["cache", "stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache is empty"));
    }

    #[test]
    fn cache_clear_leaves_account_alone() {
        let vault = TempDir::new().unwrap();
        signup(&vault);

        kosh(&vault).arg("funds").assert().success();
        kosh(&vault).args(["cache", "clear"]).assert().success();

        kosh(&vault)
            .args(["profile", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("asha@example.com"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn config_path_and_set() {
        let vault = TempDir::new().unwrap();

        kosh(&vault)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));

        kosh(&vault)
            .args(["config", "set", "cache.default_tier", "long"])
            .assert()
            .success();

        kosh(&vault)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("default_tier = \"long\""));

        kosh(&vault)
            .args(["config", "set", "cache.default_tier", "forever"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid tier"));

        kosh(&vault)
            .args(["config", "set", "bogus.key", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }
}
