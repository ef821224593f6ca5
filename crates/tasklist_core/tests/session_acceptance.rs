use chrono::NaiveDate;
use std::io::Cursor;
use tasklist_core::{
    FixedClock, MemoryConsole, StdConsole, TaskId, TaskList, TaskRegistry, PROMPT,
};

/// Records the input lines to feed and the exact transcript they must produce.
struct Script {
    input: Vec<String>,
    expected: String,
}

impl Script {
    fn new() -> Self {
        Self {
            input: Vec::new(),
            expected: String::new(),
        }
    }

    fn execute(&mut self, command: &str) -> &mut Self {
        self.expected.push_str(PROMPT);
        self.input.push(command.to_string());
        self
    }

    fn read_lines(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.expected.push_str(line);
            self.expected.push('\n');
        }
        self
    }

    fn run_on(&self, today: NaiveDate) -> TaskRegistry {
        let mut registry = TaskRegistry::new();
        let console = MemoryConsole::with_input(self.input.iter().cloned());
        let mut task_list =
            TaskList::with_builtins(console, FixedClock(today)).expect("builtins register");
        task_list.run(&mut registry).expect("in-memory console never fails");
        assert_eq!(task_list.console().output(), self.expected);
        registry
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn secrets_script() -> Script {
    let mut script = Script::new();
    script
        .execute("show")
        .execute("add project secrets")
        .execute("add task secrets Eat more donuts.")
        .execute("add task secrets Destroy all humans.");
    script
}

#[test]
fn it_works() {
    let mut script = secrets_script();
    script.execute("show").read_lines(&[
        "secrets",
        "    [ ] 1: Eat more donuts.",
        "    [ ] 2: Destroy all humans.",
        "",
    ]);

    script
        .execute("add project training")
        .execute("add task training Four Elements of Simple Design")
        .execute("add task training SOLID")
        .execute("add task training Coupling and Cohesion")
        .execute("add task training Primitive Obsession")
        .execute("add task training Outside-In TDD")
        .execute("add task training Interaction-Driven Design");

    script
        .execute("check 1")
        .execute("check 3")
        .execute("check 5")
        .execute("check 6");

    script.execute("show").read_lines(&[
        "secrets",
        "    [x] 1: Eat more donuts.",
        "    [ ] 2: Destroy all humans.",
        "",
        "training",
        "    [x] 3: Four Elements of Simple Design",
        "    [ ] 4: SOLID",
        "    [x] 5: Coupling and Cohesion",
        "    [x] 6: Primitive Obsession",
        "    [ ] 7: Outside-In TDD",
        "    [ ] 8: Interaction-Driven Design",
        "",
    ]);

    script.execute("quit");
    let registry = script.run_on(day(2024, 8, 22));
    assert_eq!(registry.task_count(), 8);
}

#[test]
fn non_existing_command_is_reported_and_loop_continues() {
    let mut script = Script::new();
    script
        .execute("nonExistingCommand")
        .read_lines(&["I don't know what the command \"nonExistingCommand\" is."])
        .execute("add project secrets")
        .execute("show")
        .read_lines(&["secrets", ""])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn single_deadline_does_not_change_show() {
    let mut script = secrets_script();
    script
        .execute("deadline 1 01-02-2025")
        .execute("show")
        .read_lines(&[
            "secrets",
            "    [ ] 1: Eat more donuts.",
            "    [ ] 2: Destroy all humans.",
            "",
        ])
        .execute("quit");

    let registry = script.run_on(day(2024, 8, 22));
    let deadline = registry
        .task(TaskId(1))
        .and_then(|task| task.deadline)
        .expect("deadline attached");
    assert_eq!(deadline.date(), day(2025, 2, 1));
}

#[test]
fn past_deadline_cannot_be_added() {
    let mut script = secrets_script();
    script
        .execute("deadline 1 01-02-1994")
        .read_lines(&["Deadline cannot be added; is in the past"])
        .execute("quit");

    let registry = script.run_on(day(2024, 8, 22));
    assert_eq!(registry.task(TaskId(1)).and_then(|task| task.deadline), None);
}

#[test]
fn deadline_cannot_be_set_on_nonexisting_id() {
    let mut script = secrets_script();
    script
        .execute("deadline 10 01-02-2025")
        .read_lines(&["Deadline cannot be added; id does not exist"])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn malformed_deadline_is_reported() {
    let mut script = secrets_script();
    script
        .execute("deadline 1 2025-02-01")
        .read_lines(&["Deadline cannot be added; \"2025-02-01\" is not a dd-mm-yyyy date"])
        .execute("deadline 1")
        .read_lines(&["Usage: deadline <task ID> <dd-mm-yyyy>"])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn today_shows_task_with_deadline_today() {
    let mut script = secrets_script();
    script
        .execute("deadline 1 22-08-2024")
        .execute("today")
        .read_lines(&["secrets", "    [ ] 1: Eat more donuts.", ""])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn today_shows_tasks_with_deadline_today() {
    let mut script = secrets_script();
    script
        .execute("deadline 1 22-08-2024")
        .execute("deadline 2 22-08-2024")
        .execute("today")
        .read_lines(&[
            "secrets",
            "    [ ] 1: Eat more donuts.",
            "    [ ] 2: Destroy all humans.",
            "",
        ])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn today_skips_future_deadlines_but_keeps_project_headers() {
    let mut script = secrets_script();
    script
        .execute("add project training")
        .execute("add task training SOLID")
        .execute("deadline 1 23-08-2024")
        .execute("check 3")
        .execute("deadline 3 22-08-2024")
        .execute("today")
        .read_lines(&["secrets", "", "training", "    [x] 3: SOLID", ""])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn missing_project_and_unknown_id_are_reported() {
    let mut script = secrets_script();
    script
        .execute("add task training SOLID")
        .read_lines(&["Could not find a project with the name \"training\"."])
        .execute("check 9")
        .read_lines(&["Could not find a task with an ID of 9."])
        .execute("uncheck 9")
        .read_lines(&["Could not find a task with an ID of 9."])
        .execute("add project secrets")
        .read_lines(&["A project with the name \"secrets\" already exists."])
        .execute("add project training")
        .execute("add task training SOLID")
        .execute("show")
        .read_lines(&[
            "secrets",
            "    [ ] 1: Eat more donuts.",
            "    [ ] 2: Destroy all humans.",
            "",
            "training",
            "    [ ] 3: SOLID",
            "",
        ])
        .execute("quit");
    script.run_on(day(2024, 8, 22));
}

#[test]
fn end_of_input_without_quit_terminates_quietly() {
    let mut script = secrets_script();
    script.execute("check 2");
    // The loop prompts once more before noticing the input is exhausted.
    script.expected.push_str(PROMPT);
    let registry = script.run_on(day(2024, 8, 22));
    assert!(registry.task(TaskId(2)).expect("task 2").done);
}

#[test]
fn invalid_utf8_line_does_not_end_the_session() {
    let input = b"add project secrets\ncaf\xE9\nadd task secrets x\nshow\nquit\n".to_vec();
    let console = StdConsole::new(Cursor::new(input), Vec::new());
    let mut task_list =
        TaskList::with_builtins(console, FixedClock(day(2024, 8, 22))).expect("builtins register");
    let mut registry = TaskRegistry::new();

    task_list
        .run(&mut registry)
        .expect("bad bytes are not a transport failure");
    assert_eq!(registry.task_count(), 1);
    assert_eq!(
        registry.task(TaskId(1)).map(|task| task.description.as_str()),
        Some("x")
    );
}
