// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn new_reports_issue() {
    let temp = init_temp();

    civic()
        .args(["new", "Pothole on Main", "-d", "public-works"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created city-"))
        .stdout(predicate::str::contains("[medium]"));
}

#[test]
fn new_requires_department() {
    let temp = init_temp();

    civic()
        .args(["new", "Pothole"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn assign_pause_rollback_keeps_audit_trail() {
    let temp = init_temp();
    let id = create_issue(&temp, "Pothole");

    civic()
        .args(["assign", &id, "u7"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue assigned to u7 [in_progress]"))
        .stdout(predicate::str::contains("notify u7"));

    civic()
        .args(["pause", &id, "blocked"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue paused: blocked [paused]"));

    // With no status_change in history the second-newest entry (the assign)
    // decides, and its origin was open.
    civic()
        .args(["rollback", &id])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rolled back to previous status: open"));

    let history = json_of(&temp, &["log", &id]);
    let kinds: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["payload"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["assign", "assign", "pause", "rollback"]);
}

#[test]
fn work_steps_and_rollback() {
    let temp = init_temp();
    let id = create_issue(&temp, "Streetlight");

    civic()
        .args(["act", &id, "start"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[in_progress]"));

    civic()
        .args(["act", &id, "complete", "-n", "Replaced bulb"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Action taken: complete - Replaced bulb [resolved]"))
        // The reporter is the actor here, so nobody needs telling.
        .stdout(predicate::str::contains("notify").not());

    civic()
        .args(["rollback", &id, "--target", "act-unknown"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[in_progress]"));

    let issue = json_of(&temp, &["show", &id]);
    assert_eq!(issue["status"], "in_progress");
    assert_eq!(issue["notes"], "Replaced bulb");
    assert_eq!(issue["history"].as_array().unwrap().len(), 4);
    assert_eq!(issue["history"][3]["payload"]["rolled_back_from"], "act-unknown");
}

#[test]
fn unknown_step_fails_without_recording() {
    let temp = init_temp();
    let id = create_issue(&temp, "Streetlight");

    civic()
        .args(["act", &id, "finish"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid work step"));

    assert_eq!(json_of(&temp, &["log", &id]).as_array().unwrap().len(), 1);
}

#[test]
fn team_assignment_uses_configured_teams() {
    let temp = init_temp();
    let id = create_issue(&temp, "Pothole");

    civic()
        .args(["team", &id, "teamX"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue assigned to team: Road Crew"))
        .stdout(predicate::str::contains("notify u7"));

    civic()
        .args(["team", &id, "teamZ"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("team not found: teamZ"));

    let issue = json_of(&temp, &["show", &id]);
    assert_eq!(issue["assigned_to"], "u7");
    assert_eq!(issue["assigned_team"], serde_json::json!(["u7", "u9"]));
}

#[test]
fn edit_and_comment() {
    let temp = init_temp();
    let id = create_issue(&temp, "Pothole");

    civic()
        .args(["edit", &id, "--title", "Pothole on 5th", "-t", "road,school-zone"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue updated: title changed, tags changed"));

    civic()
        .args(["comment", &id, "Residents called again"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment added"));

    civic()
        .args(["comment", &id, "   "])
        .current_dir(temp.path())
        .assert()
        .failure();

    let issue = json_of(&temp, &["show", &id]);
    assert_eq!(issue["title"], "Pothole on 5th");
    assert_eq!(issue["tags"], serde_json::json!(["road", "school-zone"]));
    assert_eq!(issue["status"], "open");
}

#[test]
fn support_request_is_pending() {
    let temp = init_temp();
    let id = create_issue(&temp, "Pothole");

    let request = json_of(
        &temp,
        &["support", &id, "escalation", "--to", "police", "-m", "Traffic control", "-p", "high"],
    );
    assert_eq!(request["status"], "pending");
    assert_eq!(request["requested_from"], "public-works");
    assert_eq!(request["requested_by"], "u1");

    let issue = json_of(&temp, &["show", &id]);
    assert_eq!(issue["support_requests"].as_array().unwrap().len(), 1);
    assert_eq!(issue["status"], "open");
}

#[test]
fn actor_flag_overrides_config() {
    let temp = init_temp();
    let id = create_issue(&temp, "Pothole");

    civic()
        .args(["comment", &id, "on my way", "--as", "u9"])
        .current_dir(temp.path())
        .assert()
        .success();
    civic()
        .args(["comment", &id, "from env"])
        .env("CIVIC_ACTOR", "u5")
        .current_dir(temp.path())
        .assert()
        .success();

    let history = json_of(&temp, &["log", &id]);
    assert_eq!(history[1]["performed_by"], "u9");
    assert_eq!(history[2]["performed_by"], "u5");
}

#[test]
fn missing_issue_is_reported() {
    let temp = init_temp();

    civic()
        .args(["assign", "city-00000000", "u7"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: city-00000000"));
}
