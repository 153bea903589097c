//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ignite_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ignite_core::Dashboard;

fn main() {
    println!("ignite_core ping={}", ignite_core::ping());
    println!("ignite_core version={}", ignite_core::core_version());

    // Seeded demo state doubles as a quick derivation sanity check.
    let dashboard = Dashboard::sample();
    let totals = dashboard.transactions().totals();
    println!(
        "tasks {}/{} completed",
        dashboard.tasks.completed_count(),
        dashboard.tasks.len()
    );
    println!(
        "finance income={} expense={} balance={}",
        totals.income,
        totals.expense,
        dashboard.transactions().balance()
    );
    for skill in dashboard.skills.skills() {
        println!("skill `{}` mastery={}%", skill.title, skill.progress);
    }
    let target = dashboard.target();
    println!(
        "target {}/{} achieved={}% remaining={}",
        target.current_progress,
        target.monthly_target,
        target.percentage_achieved(),
        target.remaining()
    );
}
