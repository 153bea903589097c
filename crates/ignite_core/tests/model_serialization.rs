use ignite_core::{
    IncomeTarget, Priority, RunRateBreakdown, Skill, SkillStage, Task, Transaction,
    TransactionKind,
};
use uuid::Uuid;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new("Morning Workout", Some("06:00 AM")).unwrap();
    task.uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    task.priority = Priority::High;
    task.is_completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["uuid"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Morning Workout");
    assert_eq!(json["time"], "06:00 AM");
    assert_eq!(json["is_completed"], true);
    assert_eq!(json["priority"], "high");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn transaction_serialization_uses_expected_wire_fields() {
    let entry = Transaction::new(
        "Freelance Project",
        1200.0,
        TransactionKind::Income,
        Some("Freelance"),
        1_700_000_000_000,
    )
    .unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["title"], "Freelance Project");
    assert_eq!(json["amount"], 1200.0);
    assert_eq!(json["kind"], "income");
    assert_eq!(json["created_at_ms"], 1_700_000_000_000_i64);
    assert_eq!(json["category"], "Freelance");

    let decoded: Transaction = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn skill_serialization_round_trips_with_stages() {
    let mut stage = SkillStage::new("Java Basics");
    stage.is_completed = true;
    let skill = Skill::new("Android Development", "Programming", vec![stage]);

    let json = serde_json::to_value(&skill).unwrap();
    assert_eq!(json["title"], "Android Development");
    assert_eq!(json["category"], "Programming");
    assert_eq!(json["progress"], 100);
    assert_eq!(json["stages"][0]["title"], "Java Basics");
    assert_eq!(json["stages"][0]["is_completed"], true);
    assert_eq!(json["video_url"], serde_json::Value::Null);

    let decoded: Skill = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, skill);
}

#[test]
fn target_serialization_round_trips() {
    let mut target = IncomeTarget::new(5000.0);
    target.current_progress = 1200.0;
    target.breakdown = RunRateBreakdown {
        daily: 166.0,
        weekly: 1250.0,
    };
    target.strategies.push("Launch Side Project".to_string());

    let json = serde_json::to_value(&target).unwrap();
    assert_eq!(json["monthly_target"], 5000.0);
    assert_eq!(json["current_progress"], 1200.0);
    assert_eq!(json["breakdown"]["daily"], 166.0);
    assert_eq!(json["breakdown"]["weekly"], 1250.0);
    assert_eq!(json["strategies"][0], "Launch Side Project");

    let decoded: IncomeTarget = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, target);
}
