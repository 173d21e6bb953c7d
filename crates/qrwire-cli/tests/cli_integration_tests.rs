use predicates::prelude::*;
use qrwire_schemes::Scheme;
use qrwire_testing::{fixtures, qrwire_command};

#[test]
fn test_version_flag() {
    qrwire_command()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^qrwire \d+\.\d+\.\d+\n$").unwrap());

    qrwire_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qrwire"));
}

#[test]
fn test_help_lists_the_flags() {
    qrwire_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--type")
                .and(predicate::str::contains("--save"))
                .and(predicate::str::contains("--list"))
                .and(predicate::str::contains("--ec-level")),
        );
}

#[test]
fn test_no_arguments_shows_guidance() {
    qrwire_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Get started"));
}

#[test]
fn test_list_plain() {
    qrwire_command()
        .arg("--list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("SCHEME")
                .and(predicate::str::contains("wifi"))
                .and(predicate::str::contains("WiFi network"))
                .and(predicate::str::contains("Contact card (vCard 3.0)")),
        );
}

#[test]
fn test_list_json() {
    let output = qrwire_command()
        .args(["--list", "--format", "json"])
        .output()
        .expect("Failed to run qrwire --list");
    assert!(output.status.success());

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list output should be JSON");
    let rows = rows.as_array().expect("list output should be an array");
    assert_eq!(rows.len(), 12);

    let wifi = rows
        .iter()
        .find(|row| row["name"] == "wifi")
        .expect("wifi should be listed");
    assert_eq!(wifi["label"], "WiFi network");
    assert_eq!(wifi["required"], serde_json::json!(["ssid", "security"]));

    // Declared field specs ride along for machine consumers.
    let fields = wifi["fields"]
        .as_array()
        .expect("wifi fields should be an array");
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0]["key"], "ssid");
    assert_eq!(fields[0]["kind"], "text");
    assert_eq!(
        fields[1]["kind"]["choice"]["options"],
        serde_json::json!(["WEP", "WPA", "WPA2", "nopass"])
    );
    assert_eq!(fields[2]["key"], "password");
    assert_eq!(fields[2]["required"], false);

    let calendar = rows
        .iter()
        .find(|row| row["name"] == "calendar")
        .expect("calendar should be listed");
    assert_eq!(calendar["fields"][4]["key"], "start");
    assert_eq!(calendar["fields"][4]["kind"], "date");
}

#[test]
fn test_unknown_scheme_fails() {
    qrwire_command()
        .args(["--type", "qrcode"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("unknown scheme: qrcode")
                .and(predicate::str::contains("--list")),
        );
}

#[test]
fn test_wifi_payload_from_stdin() {
    qrwire_command()
        .args(["--type", "wifi", "--print"])
        .write_stdin(fixtures::stdin_script(Scheme::Wifi, fixtures::WIFI_HOME))
        .assert()
        .success()
        .stdout("WIFI:S:Home Net\\;1;T:WPA2;P:p@ss\\,1;;\n");
}

#[test]
fn test_wifi_open_network_payload() {
    qrwire_command()
        .args(["--type", "wifi", "--print"])
        .write_stdin(fixtures::stdin_script(
            Scheme::Wifi,
            fixtures::WIFI_CAFE_OPEN,
        ))
        .assert()
        .success()
        .stdout("WIFI:S:Cafe;T:nopass;;\n");
}

#[test]
fn test_wifi_missing_password_fails() {
    qrwire_command()
        .args(["--type", "wifi", "--print"])
        .write_stdin(fixtures::stdin_script(
            Scheme::Wifi,
            &[("ssid", "Home"), ("security", "WPA2")],
        ))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required field: password"));
}

#[test]
fn test_missing_required_field_fails() {
    qrwire_command()
        .args(["--type", "url", "--print"])
        .write_stdin("\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required field: url"));
}

#[test]
fn test_calendar_payload_in_utc() {
    // qrwire_command pins TZ=UTC, so the wall-clock inputs and the UTC
    // stamps line up exactly.
    qrwire_command()
        .args(["--type", "calendar", "--print"])
        .write_stdin(fixtures::stdin_script(
            Scheme::Calendar,
            fixtures::CALENDAR_LAUNCH_REVIEW,
        ))
        .assert()
        .success()
        .stdout(
            "BEGIN:VEVENT\n\
             SUMMARY:Launch review\n\
             LOCATION:Room 4\\, floor 2\n\
             URL;VALUE=URI:https://cal.example/launch\n\
             DESCRIPTION:Bring printed agendas\n\
             DTSTART:20250101T090000Z\n\
             DTEND:20250101T103000Z\n\
             END:VEVENT\n",
        );
}

#[test]
fn test_calendar_malformed_date_fails() {
    qrwire_command()
        .args(["--type", "calendar", "--print"])
        .write_stdin(fixtures::stdin_script(
            Scheme::Calendar,
            &[
                ("title", "Standup"),
                ("start", "20250101 0900"),
                ("end", "whenever"),
            ],
        ))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed end date"));
}

#[test]
fn test_calendar_fold_resolves_to_the_earliest_instant() {
    // US Eastern falls back on 2025-11-02, so 01:30 occurs twice:
    // 01:30 EDT (05:30Z) and 01:30 EST (06:30Z). The first reading wins.
    qrwire_command()
        .env("TZ", "America/New_York")
        .args(["--type", "calendar", "--print"])
        .write_stdin(fixtures::stdin_script(
            Scheme::Calendar,
            &[
                ("title", "Clock check"),
                ("start", "20251102 0130"),
                ("end", "20251102 0300"),
            ],
        ))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("DTSTART:20251102T053000Z")
                .and(predicate::str::contains("DTEND:20251102T080000Z")),
        );
}

#[test]
fn test_calendar_gap_time_fails() {
    // US Eastern springs forward on 2025-03-09; 02:30 never happens.
    qrwire_command()
        .env("TZ", "America/New_York")
        .args(["--type", "calendar", "--print"])
        .write_stdin(fixtures::stdin_script(
            Scheme::Calendar,
            &[
                ("title", "Clock check"),
                ("start", "20250309 0230"),
                ("end", "20250309 0400"),
            ],
        ))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed start date"));
}

#[test]
fn test_map_coordinates_are_validated() {
    qrwire_command()
        .args(["--type", "map", "--print"])
        .write_stdin("48.8584\nnope\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid lon coordinate"));
}

#[test]
fn test_print_json_report() {
    // Uppercase scheme name also exercises case-insensitive lookup.
    let assert = qrwire_command()
        .args(["--type", "URL", "--print", "--format", "json"])
        .write_stdin("https://example.com\n")
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("print output should be JSON");
    assert_eq!(report["scheme"], "url");
    assert_eq!(report["payload"], "https://example.com");
}

#[test]
fn test_save_writes_png_and_replaces_extension() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("wifi-card.txt");

    qrwire_command()
        .args(["--type", "wifi", "--print", "--save"])
        .arg(&target)
        .write_stdin(fixtures::stdin_script(Scheme::Wifi, fixtures::WIFI_HOME))
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved"));

    let saved = dir.path().join("wifi-card.png");
    assert!(saved.exists(), "expected {} to exist", saved.display());
    assert!(!target.exists(), "the .txt name should not be written");

    let bytes = std::fs::read(&saved).expect("Failed to read saved image");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_render_size_flags_are_bounded() {
    qrwire_command()
        .args(["--type", "url", "--box-size", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    qrwire_command()
        .args(["--type", "url", "--border", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    qrwire_command()
        .args(["--type", "url", "--box-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_payloads_are_deterministic() {
    let run = || {
        qrwire_command()
            .args(["--type", "vcard", "--print"])
            .write_stdin(fixtures::stdin_script(
                Scheme::Vcard,
                fixtures::VCARD_ANN_SMITH,
            ))
            .output()
            .expect("Failed to run qrwire")
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_terminal_draw_uses_block_glyphs() {
    let output = qrwire_command()
        .args(["--type", "url"])
        .write_stdin("https://example.com\n")
        .output()
        .expect("Failed to run qrwire");
    assert!(output.status.success());

    let drawn = String::from_utf8(output.stdout).expect("terminal output should be UTF-8");
    assert!(drawn.contains('█'));
    assert!(drawn.lines().count() > 10);
}
