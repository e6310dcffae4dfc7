//! Main-section renderer for console calculators.
//!
//! Emits the `Calculator` class: state from the blueprint's UI options,
//! the read-eval loop with feature-gated command dispatch, and a sandboxed
//! expression evaluator whose symbol whitelist grows with the enabled
//! features. Only whitelisted names are reachable from user input.

use std::fmt::Write as _;

use calcgen_core::application::ports::MainRenderer;
use calcgen_core::domain::{Feature, Library, MainSegment, Resolved};
use tracing::instrument;

/// Renderer adapter for CLI calculators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer;

impl MainRenderer for ConsoleRenderer {
    #[instrument(skip_all)]
    fn render_main(&self, resolved: &Resolved) -> MainSegment {
        MainSegment {
            body: calculator_class(resolved),
            entry: ENTRY.to_string(),
        }
    }
}

const ENTRY: &str = r#"if __name__ == "__main__":
    calculator = Calculator()
    calculator.run()"#;

fn calculator_class(resolved: &Resolved) -> String {
    let ui = resolved.ui();
    let memory = resolved.features().contains(Feature::Memory);
    let history = resolved.features().contains(Feature::History);
    let trig = resolved.features().contains(Feature::Trigonometric);
    let log = resolved.features().contains(Feature::Logarithmic);
    let math = resolved.libraries().contains(Library::Math);
    let numpy = resolved.libraries().contains(Library::Numpy);
    let stats = resolved.features().contains(Feature::Statistical) && numpy;
    let interactive = resolved.interactive();
    let banner = ui.show_banner;
    let help = ui.show_help;

    let mut out = String::new();

    out.push_str("class Calculator:\n");
    out.push_str("    \"\"\"Main calculator class\"\"\"\n\n");
    out.push_str("    def __init__(self):\n");
    let _ = writeln!(out, "        self.precision = {}", ui.precision);
    let _ = writeln!(out, "        self.angle_unit = \"{}\"", ui.angle_unit);
    if memory {
        out.push_str("        self.memory = Memory()\n");
    }
    if history {
        out.push_str("        self.history = History()\n");
    }

    out.push_str(
        r#"
    def format_result(self, result):
        """Format calculation result"""
        if isinstance(result, (int, float)):
            return round(result, self.precision)
        return result
"#,
    );

    out.push_str("\n    def run(self):\n");
    out.push_str("        \"\"\"Run the calculator interface\"\"\"\n");
    if banner {
        out.push_str("        self.show_banner()\n");
    }
    if interactive {
        out.push_str("        self.interactive_mode()\n");
    }
    if !banner && !interactive {
        out.push_str("        pass\n");
    }

    if interactive {
        push_interactive_mode(&mut out, memory, history, help);
    }
    if banner {
        push_banner(&mut out, resolved);
    }
    if help {
        push_help(&mut out, memory, history);
    }
    push_evaluator(&mut out, math, trig, log, numpy, stats);
    if memory {
        out.push_str(MEMORY_COMMANDS);
    }
    if history {
        out.push_str(HISTORY_COMMANDS);
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn push_interactive_mode(out: &mut String, memory: bool, history: bool, help: bool) {
    out.push_str(
        r#"
    def interactive_mode(self):
        """Interactive calculator mode"""
        print("Calculator started. Type 'help' for commands, 'quit' to exit.")

        while True:
            try:
                user_input = input("calc> ").strip()

                if user_input.lower() in ['quit', 'exit', 'q']:
                    break
"#,
    );
    if help {
        out.push_str(
            r#"                elif user_input.lower() == 'help':
                    self.show_help()
"#,
        );
    }
    out.push_str(
        r#"                elif user_input.lower() == 'clear':
                    os.system('cls' if os.name == 'nt' else 'clear')
"#,
    );
    if memory {
        out.push_str(
            r#"                elif user_input.lower().startswith('mem'):
                    self.handle_memory_commands(user_input)
"#,
        );
    }
    if history {
        out.push_str(
            r#"                elif user_input.lower().startswith('hist'):
                    self.handle_history_commands(user_input)
"#,
        );
    }
    out.push_str(
        r#"                else:
                    result = self.evaluate_expression(user_input)
                    formatted_result = self.format_result(result)
                    print(f"Result: {formatted_result}")
"#,
    );
    if history {
        out.push_str("                    self.history.add_entry(user_input, formatted_result)\n");
    }
    out.push_str(
        r#"
            except KeyboardInterrupt:
                print("\nGoodbye!")
                break
            except Exception as e:
                print(f"Error: {e}")
"#,
    );
}

fn push_banner(out: &mut String, resolved: &Resolved) {
    let _ = write!(
        out,
        r#"
    def show_banner(self):
        """Display calculator banner"""
        print("="*50)
        print("  {name}")
        print("  {description}")
        print("="*50)
"#,
        name = resolved.project_name(),
        description = resolved.description(),
    );
}

fn push_help(out: &mut String, memory: bool, history: bool) {
    out.push_str(
        r#"
    def show_help(self):
        """Display help information"""
        help_text = """
Available commands:
  Basic operations: +, -, *, /, **, %
  Functions: sin(), cos(), tan(), log(), ln(), sqrt()
"#,
    );
    if memory {
        out.push_str("  Memory: mem store <value>, mem recall, mem clear\n");
    }
    if history {
        out.push_str("  History: hist show, hist clear, hist save\n");
    }
    out.push_str(
        r#"  Other: help, clear, quit
        """
        print(help_text)
"#,
    );
}

fn push_evaluator(
    out: &mut String,
    math: bool,
    trig: bool,
    log: bool,
    numpy: bool,
    stats: bool,
) {
    out.push_str(
        r#"
    def evaluate_expression(self, expression):
        """Evaluate mathematical expression"""
        try:
            expression = expression.replace('^', '**')
"#,
    );
    if math {
        out.push_str(
            r#"            safe_dict = {
                "__builtins__": {},
                "abs": abs, "round": round, "min": min, "max": max,
                "sqrt": math.sqrt, "pi": math.pi, "e": math.e
            }
"#,
        );
    } else {
        out.push_str(
            r#"            safe_dict = {
                "__builtins__": {},
                "abs": abs, "round": round, "min": min, "max": max
            }
"#,
        );
    }
    if trig {
        out.push_str(
            r#"            safe_dict.update({
                "sin": lambda x: sin(x, self.angle_unit),
                "cos": lambda x: cos(x, self.angle_unit),
                "tan": lambda x: tan(x, self.angle_unit),
                "asin": lambda x: asin(x, self.angle_unit),
                "acos": lambda x: acos(x, self.angle_unit),
                "atan": lambda x: atan(x, self.angle_unit)
            })
"#,
        );
    }
    if log {
        out.push_str(
            r#"            safe_dict.update({
                "log": log, "ln": ln, "log10": log10, "log2": log2
            })
"#,
        );
    }
    if numpy {
        if stats {
            out.push_str(
                r#"            safe_dict.update({
                "np": np, "array": np.array, "mean": mean,
                "median": median, "std": std
            })
"#,
            );
        } else {
            out.push_str(
                r#"            safe_dict.update({
                "np": np, "array": np.array
            })
"#,
            );
        }
    }
    out.push_str(
        r#"
            return eval(expression, safe_dict)
        except Exception as e:
            raise ValueError(f"Invalid expression: {e}")
"#,
    );
}

const MEMORY_COMMANDS: &str = r#"
    def handle_memory_commands(self, command):
        """Handle memory-related commands"""
        parts = command.split()
        if len(parts) < 2:
            print("Memory commands: mem store <value>, mem recall, mem clear")
            return

        action = parts[1].lower()
        if action == "store" and len(parts) > 2:
            try:
                value = float(parts[2])
                print(self.memory.store(value))
            except ValueError:
                print("Invalid value for memory storage")
        elif action == "recall":
            print(f"Memory: {self.memory.recall()}")
        elif action == "clear":
            print(self.memory.clear())
        else:
            print("Unknown memory command")
"#;

const HISTORY_COMMANDS: &str = r#"
    def handle_history_commands(self, command):
        """Handle history-related commands"""
        parts = command.split()
        if len(parts) < 2:
            print("History commands: hist show, hist clear, hist save")
            return

        action = parts[1].lower()
        if action == "show":
            count = 10
            if len(parts) > 2:
                try:
                    count = int(parts[2])
                except ValueError:
                    pass
            history = self.history.get_history(count)
            for entry in history:
                print(f"{entry['timestamp']}: {entry['operation']} = {entry['result']}")
        elif action == "clear":
            print(self.history.clear_history())
        elif action == "save":
            filename = "calculator_history.json"
            if len(parts) > 2:
                filename = parts[2]
            print(self.history.save_to_file(filename))
        else:
            print("Unknown history command")
"#;
