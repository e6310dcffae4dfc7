//! Button grid plans for the desktop renderer.
//!
//! Basic calculators use a 4-column grid; scientific calculators a
//! 6-column grid with an extra science row. Rows that depend on features
//! (memory, trig, log) shift the rows below them.

use calcgen_core::domain::{ButtonKey, CalculatorKind, Feature, LayoutPlan, Resolved};

/// Build the button plan for a resolved blueprint.
pub fn plan_for(resolved: &Resolved) -> LayoutPlan {
    match resolved.kind() {
        CalculatorKind::Basic => basic_plan(resolved),
        CalculatorKind::Scientific => scientific_plan(resolved),
    }
}

fn basic_plan(resolved: &Resolved) -> LayoutPlan {
    let mut plan = LayoutPlan::new(4);
    let mut row = 0;

    if resolved.features().contains(Feature::Memory) {
        memory_row(&mut plan, &mut row);
    }
    clear_row(&mut plan, &mut row);
    digit_rows(&mut plan, &mut row);
    plan.place_span(ButtonKey::Equals, row, 0, 4);

    plan
}

fn scientific_plan(resolved: &Resolved) -> LayoutPlan {
    let mut plan = LayoutPlan::new(6);
    let mut row = 0;

    if resolved.features().contains(Feature::Memory) {
        memory_row(&mut plan, &mut row);
    }

    // Science row: trig group left, log group right. The row exists when
    // either group does, so log-only blueprints still get a complete row.
    let trig = resolved.features().contains(Feature::Trigonometric);
    let log = resolved.features().contains(Feature::Logarithmic);
    if trig || log {
        if trig {
            plan.place(ButtonKey::Sin, row, 0);
            plan.place(ButtonKey::Cos, row, 1);
            plan.place(ButtonKey::Tan, row, 2);
        }
        if log {
            plan.place(ButtonKey::Log, row, 3);
            plan.place(ButtonKey::Ln, row, 4);
        }
        row += 1;
    }

    clear_row(&mut plan, &mut row);
    digit_rows(&mut plan, &mut row);
    plan.place_span(ButtonKey::Equals, row, 0, 6);

    plan
}

fn memory_row(plan: &mut LayoutPlan, row: &mut u8) {
    plan.place(ButtonKey::MemoryStore, *row, 0);
    plan.place(ButtonKey::MemoryRecall, *row, 1);
    plan.place(ButtonKey::MemoryClear, *row, 2);
    *row += 1;
}

fn clear_row(plan: &mut LayoutPlan, row: &mut u8) {
    plan.place(ButtonKey::ClearEntry, *row, 0);
    plan.place(ButtonKey::Clear, *row, 1);
    *row += 1;
}

fn digit_rows(plan: &mut LayoutPlan, row: &mut u8) {
    plan.place(ButtonKey::Digit(7), *row, 0);
    plan.place(ButtonKey::Digit(8), *row, 1);
    plan.place(ButtonKey::Digit(9), *row, 2);
    plan.place(ButtonKey::Divide, *row, 3);
    *row += 1;

    plan.place(ButtonKey::Digit(4), *row, 0);
    plan.place(ButtonKey::Digit(5), *row, 1);
    plan.place(ButtonKey::Digit(6), *row, 2);
    plan.place(ButtonKey::Multiply, *row, 3);
    *row += 1;

    plan.place(ButtonKey::Digit(1), *row, 0);
    plan.place(ButtonKey::Digit(2), *row, 1);
    plan.place(ButtonKey::Digit(3), *row, 2);
    plan.place(ButtonKey::Subtract, *row, 3);
    *row += 1;

    plan.place_span(ButtonKey::Digit(0), *row, 0, 2);
    plan.place(ButtonKey::Decimal, *row, 2);
    plan.place(ButtonKey::Add, *row, 3);
    *row += 1;
}
