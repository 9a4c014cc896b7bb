use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn megasena(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("megasena").unwrap();
    cmd.arg("--store").arg(store).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_echoes_sorted_numbers() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");

    megasena(&store)
        .args(["add", "42", "7", "13", "1", "60", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jogo adicionado: [1 7 13 25 42 60]"));

    let raw = std::fs::read_to_string(&store).unwrap();
    assert!(raw.contains(r#"{"numeros":[1,7,13,25,42,60]}"#));
}

#[test]
fn test_validate_with_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");

    megasena(&store)
        .args(["validate", "1", "2", "3", "4", "5", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum jogo salvo para validar."));
}

#[test]
fn test_validate_renders_table() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");

    megasena(&store)
        .args(["adicionar", "1", "2", "3", "4", "5", "6", "7"])
        .assert()
        .success();

    megasena(&store)
        .args(["validar", "6", "5", "4", "3", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resultado: [1 2 3 4 5 6]"))
        .stdout(predicate::str::contains("Números Acertados"))
        .stdout(predicate::str::contains(
            "| 1 | [1 2 3 4 5 6 7] | 1     | 6      | 0       | 6       | [1 2 3 4 5 6]     |",
        ));
}

#[test]
fn test_validate_csv_format() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");

    megasena(&store)
        .args(["add", "1", "2", "3", "4", "50", "51"])
        .assert()
        .success();

    megasena(&store)
        .args(["--format", "csv", "validate", "1", "2", "3", "4", "5", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,[1 2 3 4 50 51],0,0,1,4,[1 2 3 4]"));
}

#[test]
fn test_invalid_game_is_rejected_and_not_saved() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");

    megasena(&store)
        .args(["add", "1", "2", "3", "4", "5", "61"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("entre 1 e 60"));

    megasena(&store)
        .args(["add", "1", "2", "3", "4", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("entre 6 e 15"));

    megasena(&store)
        .args(["validate", "1", "2", "3", "4", "5", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("não podem se repetir"));

    assert!(!store.exists());
}

#[test]
fn test_non_numeric_argument_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");

    megasena(&store)
        .args(["add", "1", "2", "três", "4", "5", "6"])
        .assert()
        .code(2);

    assert!(!store.exists());
}

#[test]
fn test_corrupt_store_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("jogos.json");
    std::fs::write(&store, "[{").unwrap();

    megasena(&store)
        .args(["validate", "1", "2", "3", "4", "5", "6"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Erro ao carregar jogos"));
}

#[test]
fn test_store_path_from_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("from-config.json");
    let config_path = temp_dir.path().join("megasena.toml");
    std::fs::write(
        &config_path,
        format!(
            "[storage]\npath = \"{}\"\n",
            store.to_str().unwrap().replace('\\', "/")
        ),
    )
    .unwrap();

    Command::cargo_bin("megasena")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .args(["add", "10", "20", "30", "40", "50", "60"])
        .assert()
        .success();

    assert!(store.exists());

    Command::cargo_bin("megasena")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"combinations\": 1"));
}
