use chrono::NaiveDate;
use fitrackapp::api::FitrackApi;
use fitrackapp::error::FitrackError;
use fitrackapp::model::{Collection, Log, NewLog, NewUser, User};
use fitrackapp::store::fs::FileStore;
use fitrackapp::store::DataStore;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Written by the earlier Python portal: json.dump(data, f, indent=4)
const LEGACY_USERS: &str = r#"[
    {
        "user_id": 1,
        "name": "Ana",
        "age": 30,
        "height": 1.65,
        "weight": 60.0,
        "contact": "x"
    },
    {
        "user_id": 2,
        "name": "Bo",
        "age": 41,
        "height": 1.8,
        "weight": 82.5,
        "contact": "bo@example.com"
    }
]"#;

// Out-of-range values the old portal accepted, and a non-ASCII name
const LEGACY_ODD_LOGS: &str = r#"[
    {
        "log_id": 1,
        "user_id": 1,
        "date": "2024-03-01",
        "steps": -5,
        "calories_burned": 120,
        "calories_consumed": 1900,
        "exercise_time": 15.0
    },
    {
        "log_id": 2,
        "user_id": 1,
        "date": "2024-03-02",
        "steps": 15,
        "calories_burned": 80,
        "calories_consumed": 2100,
        "exercise_time": 40.5
    }
]"#;

const LEGACY_UNICODE_USERS: &str = r#"[
    {
        "user_id": 1,
        "name": "Jos\u00e9 \ud83c\udfc3",
        "age": -1,
        "height": 1.72,
        "weight": 70.0,
        "contact": "\u65e5\u672c"
    }
]"#;

fn setup() -> (TempDir, PathBuf, FitrackApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();
    let api = FitrackApi::new(FileStore::new(root.clone()));
    (dir, root, api)
}

fn new_log(user_id: u64, steps: i64) -> NewLog {
    NewLog {
        user_id,
        steps,
        calories_burned: 200,
        calories_consumed: 1800,
        exercise_time: 20.5,
        date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
    }
}

#[test]
fn test_legacy_file_resaves_byte_for_byte() {
    let (_dir, root, _api) = setup();
    let path = root.join("users.json");
    fs::write(&path, LEGACY_USERS).unwrap();

    let mut store = FileStore::new(root.clone());
    let users: Vec<User> = store.load().unwrap();
    assert_eq!(users.len(), 2);
    store.save(&users).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY_USERS);
}

#[test]
fn test_update_profile_unknown_user_leaves_file_untouched() {
    let (_dir, root, mut api) = setup();
    let path = root.join("users.json");
    fs::write(&path, LEGACY_USERS).unwrap();

    let result = api.update_profile(9, 1.0, 1.0);

    assert!(matches!(result, Err(FitrackError::NotFound { id: 9, .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY_USERS);
}

#[test]
fn test_register_after_legacy_data_continues_ids() {
    let (_dir, root, mut api) = setup();
    fs::write(root.join("users.json"), LEGACY_USERS).unwrap();

    let user = api
        .register_user(NewUser {
            name: "Cy".to_string(),
            age: 22,
            height: 1.7,
            weight: 65.0,
            contact: String::new(),
        })
        .unwrap();
    assert_eq!(user.user_id, 3);
}

#[test]
fn test_logs_persist_across_store_instances() {
    let (_dir, root, mut api) = setup();
    api.append_log(new_log(1, 1000)).unwrap();
    api.append_log(new_log(2, 500)).unwrap();
    api.append_log(new_log(1, 3000)).unwrap();

    let reopened = FitrackApi::new(FileStore::new(root.clone()));
    let mine: Vec<Log> = reopened.list_logs_for_user(1).unwrap();
    assert_eq!(mine.iter().map(|l| l.log_id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(mine[0].date.to_string(), "2024-02-29");

    let raw = fs::read_to_string(root.join("logs.json")).unwrap();
    assert!(raw.contains("\"date\": \"2024-02-29\""));
    assert!(raw.contains("\"exercise_time\": 20.5"));
}

#[test]
fn test_corrupt_log_file_is_not_replaced() {
    let (_dir, root, mut api) = setup();
    let path = root.join("logs.json");
    fs::write(&path, "{ this is not json").unwrap();

    assert!(matches!(
        api.list_logs(),
        Err(FitrackError::StorageCorrupt {
            collection: Collection::Logs,
            ..
        })
    ));
    assert!(api.append_log(new_log(1, 1)).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
}

#[test]
fn test_init_creates_empty_files() {
    let (_dir, root, mut api) = setup();
    let created = api.init().unwrap();
    assert_eq!(created.len(), 3);
    for name in ["users.json", "plans.json", "logs.json"] {
        assert_eq!(fs::read_to_string(root.join(name)).unwrap(), "[]");
    }
    assert!(api.init().unwrap().is_empty());
}

#[test]
fn test_negative_steps_load_and_resave() {
    let (_dir, root, api) = setup();
    let path = root.join("logs.json");
    fs::write(&path, LEGACY_ODD_LOGS).unwrap();

    let logs = api.list_logs().unwrap();
    assert_eq!(logs[0].steps, -5);
    let report = api.report().unwrap();
    assert_eq!(report.mean_steps, 5.0);

    let mut store = FileStore::new(root.clone());
    store.save(&logs).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY_ODD_LOGS);
}

#[test]
fn test_escaped_unicode_resaves_byte_for_byte() {
    let (_dir, root, _api) = setup();
    let path = root.join("users.json");
    fs::write(&path, LEGACY_UNICODE_USERS).unwrap();

    let mut store = FileStore::new(root.clone());
    let users: Vec<User> = store.load().unwrap();
    assert_eq!(users[0].name, "José 🏃");
    assert_eq!(users[0].age, -1);
    store.save(&users).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), LEGACY_UNICODE_USERS);
}
