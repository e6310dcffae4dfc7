//! Main-section renderer for desktop calculators.
//!
//! Emits the `CalculatorApp` class: a fixed 400x600 window, widgets built
//! from the button plan in [`super::layout`], keyboard bindings, and the
//! feature-gated memory, history, and statistics machinery. Themes are
//! applied by table lookup, never computed.

use std::fmt::Write as _;

use calcgen_core::application::ports::MainRenderer;
use calcgen_core::domain::{
    ButtonKey, CalculatorKind, Feature, LayoutPlan, MainSegment, Resolved, Theme,
};
use tracing::instrument;

use super::layout;

/// Renderer adapter for GUI calculators.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopRenderer;

impl MainRenderer for DesktopRenderer {
    #[instrument(skip_all)]
    fn render_main(&self, resolved: &Resolved) -> MainSegment {
        MainSegment {
            body: calculator_app_class(resolved),
            entry: ENTRY.to_string(),
        }
    }
}

const ENTRY: &str = r#"def main():
    """Main application entry point"""
    calculator = CalculatorApp()
    calculator.run()

if __name__ == "__main__":
    main()"#;

fn calculator_app_class(resolved: &Resolved) -> String {
    let memory = resolved.features().contains(Feature::Memory);
    let history = resolved.features().contains(Feature::History);
    let trig = resolved.features().contains(Feature::Trigonometric);
    let log = resolved.features().contains(Feature::Logarithmic);
    let stats = resolved.features().contains(Feature::Statistical);
    let has_menu = memory || history || stats;

    let mut out = String::new();

    push_init(&mut out, resolved, memory, history);
    push_create_widgets(&mut out, has_menu);
    push_create_buttons(&mut out, trig, log, memory);
    push_setup_layout(&mut out, resolved);
    out.push_str(EVENT_METHODS);
    push_calculate(&mut out, trig, history);
    out.push_str(DISPLAY_METHODS);
    if memory {
        out.push_str(MEMORY_METHODS);
    }
    if has_menu {
        push_create_menu(&mut out, stats, history);
    }
    if stats {
        out.push_str(STATS_DIALOG);
    }
    if history {
        out.push_str(HISTORY_METHODS);
    }
    push_apply_theme(&mut out, resolved.ui().theme);
    push_about(&mut out, resolved);
    out.push_str(
        r#"
    def run(self):
        """Start the calculator application"""
        self.root.mainloop()
"#,
    );

    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn push_init(out: &mut String, resolved: &Resolved, memory: bool, history: bool) {
    let _ = write!(
        out,
        r#"class CalculatorApp:
    """Main GUI Calculator Application"""

    def __init__(self):
        self.root = tk.Tk()
        self.root.title("{name}")
        self.root.geometry("400x600")
        self.root.resizable(False, False)

        # Calculator state
        self.display_var = tk.StringVar()
        self.display_var.set("0")
        self.current_expression = ""
        self.result_shown = False
        self.angle_unit = "{angle_unit}"
        self.precision = {precision}
"#,
        name = resolved.project_name(),
        angle_unit = resolved.ui().angle_unit,
        precision = resolved.ui().precision,
    );
    if memory {
        out.push_str("        self.memory = MemoryManager()\n");
    }
    if history {
        out.push_str("        self.history = HistoryManager()\n");
    }
    out.push_str(
        r#"
        # Setup GUI
        self.create_widgets()
        self.setup_layout()
        self.setup_bindings()

        # Apply theme
        self.apply_theme()
"#,
    );
}

fn push_create_widgets(out: &mut String, has_menu: bool) {
    out.push_str(
        r#"
    def create_widgets(self):
        """Create all GUI widgets"""
        # Main frame
        self.main_frame = ttk.Frame(self.root, padding="10")

        # Display frame
        self.display_frame = ttk.Frame(self.main_frame)
        self.display = ttk.Entry(
            self.display_frame,
            textvariable=self.display_var,
            justify='right',
            state='readonly'
        )

        # Expression display
        self.expr_var = tk.StringVar()
        self.expr_display = ttk.Label(
            self.display_frame,
            textvariable=self.expr_var
        )

        # Button frame
        self.button_frame = ttk.Frame(self.main_frame)

        # Create calculator buttons
        self.create_buttons()
"#,
    );
    if has_menu {
        out.push_str(
            r#"
        # Create menu
        self.create_menu()
"#,
        );
    }
}

fn push_create_buttons(out: &mut String, trig: bool, log: bool, memory: bool) {
    out.push_str(
        r#"
    def create_buttons(self):
        """Create calculator buttons"""
        button_config = {
            'width': 5
        }

        # Number buttons (0-9)
        self.num_buttons = {}
        for i in range(10):
            self.num_buttons[i] = ttk.Button(
                self.button_frame,
                text=str(i),
                command=lambda n=i: self.append_number(str(n)),
                **button_config
            )

        # Operator buttons
        self.op_buttons = {
            '+': ttk.Button(self.button_frame, text='+', command=lambda: self.append_operator('+'), **button_config),
            '-': ttk.Button(self.button_frame, text='-', command=lambda: self.append_operator('-'), **button_config),
            '*': ttk.Button(self.button_frame, text='×', command=lambda: self.append_operator('*'), **button_config),
            '/': ttk.Button(self.button_frame, text='÷', command=lambda: self.append_operator('/'), **button_config),
            '=': ttk.Button(self.button_frame, text='=', command=self.calculate, **button_config),
            '.': ttk.Button(self.button_frame, text='.', command=lambda: self.append_number('.'), **button_config),
            'C': ttk.Button(self.button_frame, text='C', command=self.clear, **button_config),
            'CE': ttk.Button(self.button_frame, text='CE', command=self.clear_entry, **button_config),
        }
"#,
    );
    if trig {
        out.push_str(
            r#"
        # Trigonometric functions
        self.trig_buttons = {
            'sin': ttk.Button(self.button_frame, text='sin', command=lambda: self.append_function('sin'), **button_config),
            'cos': ttk.Button(self.button_frame, text='cos', command=lambda: self.append_function('cos'), **button_config),
            'tan': ttk.Button(self.button_frame, text='tan', command=lambda: self.append_function('tan'), **button_config),
        }
"#,
        );
    }
    if log {
        out.push_str(
            r#"
        # Logarithmic functions
        self.log_buttons = {
            'log': ttk.Button(self.button_frame, text='log', command=lambda: self.append_function('log'), **button_config),
            'ln': ttk.Button(self.button_frame, text='ln', command=lambda: self.append_function('ln'), **button_config),
        }
"#,
        );
    }
    if memory {
        out.push_str(
            r#"
        # Memory functions
        self.mem_buttons = {
            'MS': ttk.Button(self.button_frame, text='MS', command=self.memory_store, **button_config),
            'MR': ttk.Button(self.button_frame, text='MR', command=self.memory_recall, **button_config),
            'MC': ttk.Button(self.button_frame, text='MC', command=self.memory_clear, **button_config),
        }
"#,
        );
    }
}

fn push_setup_layout(out: &mut String, resolved: &Resolved) {
    let plan = layout::plan_for(resolved);
    let pad = match resolved.kind() {
        CalculatorKind::Basic => 2,
        CalculatorKind::Scientific => 1,
    };

    out.push_str(
        r#"
    def setup_layout(self):
        """Setup widget layout"""
        self.main_frame.pack(fill='both', expand=True)

        # Display layout
        self.display_frame.pack(fill='x', pady=(0, 10))
        self.expr_display.pack(fill='x')
        self.display.pack(fill='x', ipady=10)

        # Button layout
        self.button_frame.pack(fill='both', expand=True)

        # Layout buttons in grid
"#,
    );
    push_grid_lines(out, &plan, pad);
    let _ = write!(
        out,
        r#"
        # Configure grid weights
        for i in range({columns}):
            self.button_frame.columnconfigure(i, weight=1)
        for i in range({rows}):
            self.button_frame.rowconfigure(i, weight=1)
"#,
        columns = plan.columns,
        rows = plan.rows(),
    );
}

fn push_grid_lines(out: &mut String, plan: &LayoutPlan, pad: u8) {
    for placement in plan.placements() {
        let widget = widget_expr(placement.key);
        if placement.span > 1 {
            let _ = writeln!(
                out,
                "        {widget}.grid(row={row}, column={column}, columnspan={span}, padx={pad}, pady={pad}, sticky='nsew')",
                row = placement.row,
                column = placement.column,
                span = placement.span,
            );
        } else {
            let _ = writeln!(
                out,
                "        {widget}.grid(row={row}, column={column}, padx={pad}, pady={pad}, sticky='nsew')",
                row = placement.row,
                column = placement.column,
            );
        }
    }
}

/// The Python expression that looks up a button widget.
fn widget_expr(key: ButtonKey) -> String {
    match key {
        ButtonKey::Digit(n) => format!("self.num_buttons[{n}]"),
        ButtonKey::Decimal => "self.op_buttons['.']".into(),
        ButtonKey::Add => "self.op_buttons['+']".into(),
        ButtonKey::Subtract => "self.op_buttons['-']".into(),
        ButtonKey::Multiply => "self.op_buttons['*']".into(),
        ButtonKey::Divide => "self.op_buttons['/']".into(),
        ButtonKey::Equals => "self.op_buttons['=']".into(),
        ButtonKey::Clear => "self.op_buttons['C']".into(),
        ButtonKey::ClearEntry => "self.op_buttons['CE']".into(),
        ButtonKey::MemoryStore => "self.mem_buttons['MS']".into(),
        ButtonKey::MemoryRecall => "self.mem_buttons['MR']".into(),
        ButtonKey::MemoryClear => "self.mem_buttons['MC']".into(),
        ButtonKey::Sin => "self.trig_buttons['sin']".into(),
        ButtonKey::Cos => "self.trig_buttons['cos']".into(),
        ButtonKey::Tan => "self.trig_buttons['tan']".into(),
        ButtonKey::Log => "self.log_buttons['log']".into(),
        ButtonKey::Ln => "self.log_buttons['ln']".into(),
    }
}

const EVENT_METHODS: &str = r#"
    def setup_bindings(self):
        """Setup keyboard bindings"""
        self.root.bind('<Key>', self.on_key_press)
        self.root.focus_set()

    def on_key_press(self, event):
        """Handle keyboard input"""
        key = event.char
        if key.isdigit():
            self.append_number(key)
        elif key in '+-*/':
            self.append_operator(key)
        elif key == '.':
            self.append_number('.')
        elif key == '\r' or key == '=':
            self.calculate()
        elif key.lower() == 'c':
            self.clear()
        elif event.keysym == 'BackSpace':
            self.backspace()

    def append_number(self, number):
        """Add number to current expression"""
        if self.result_shown:
            self.current_expression = ""
            self.result_shown = False

        if number == '.' and '.' in self.current_expression.split()[-1]:
            return  # Don't allow multiple decimal points

        self.current_expression += number
        self.update_display()

    def append_operator(self, operator):
        """Add operator to current expression"""
        if self.result_shown:
            self.result_shown = False

        if self.current_expression and self.current_expression[-1] in '+-*/':
            self.current_expression = self.current_expression[:-1]

        self.current_expression += operator
        self.update_display()

    def append_function(self, function):
        """Add function to current expression"""
        if self.result_shown:
            self.current_expression = ""
            self.result_shown = False

        self.current_expression += function + "("
        self.update_display()
"#;

fn push_calculate(out: &mut String, trig: bool, history: bool) {
    out.push_str(
        r#"
    def calculate(self):
        """Perform calculation"""
        try:
            if not self.current_expression:
                return

            expression = self.current_expression
"#,
    );
    if trig {
        out.push_str(
            r#"            if self.angle_unit == "degrees":
                # Convert degrees to radians for trig functions
                import re
                trig_functions = ['sin', 'cos', 'tan']
                for func in trig_functions:
                    pattern = f'{func}\\(([^)]+)\\)'
                    def replace_trig(match):
                        angle = match.group(1)
                        return f'{func}(math.radians({angle}))'
                    expression = re.sub(pattern, replace_trig, expression)
"#,
        );
    }
    out.push_str(
        r#"
            result = safe_eval(expression)
            formatted_result = self.format_result(result)

            # Update display
            self.display_var.set(str(formatted_result))
            self.expr_var.set(f"{self.current_expression} =")
"#,
    );
    if history {
        out.push_str(
            "            self.history.add_entry(self.current_expression, formatted_result)\n",
        );
    }
    out.push_str(
        r#"
            # Set up for next calculation
            self.current_expression = str(formatted_result)
            self.result_shown = True

        except Exception as e:
            self.display_var.set("Error")
            self.expr_var.set(str(e))
            self.current_expression = ""
"#,
    );
}

const DISPLAY_METHODS: &str = r#"
    def format_result(self, result):
        """Format calculation result"""
        if isinstance(result, (int, float)):
            if result == int(result):
                return int(result)
            else:
                return round(result, self.precision)
        return result

    def clear(self):
        """Clear everything"""
        self.current_expression = ""
        self.display_var.set("0")
        self.expr_var.set("")
        self.result_shown = False

    def clear_entry(self):
        """Clear current entry"""
        self.current_expression = ""
        self.display_var.set("0")
        self.update_display()

    def backspace(self):
        """Remove last character"""
        if self.current_expression:
            self.current_expression = self.current_expression[:-1]
            self.update_display()

    def update_display(self):
        """Update the display"""
        if self.current_expression:
            self.display_var.set(self.current_expression)
        else:
            self.display_var.set("0")
"#;

const MEMORY_METHODS: &str = r#"
    def memory_store(self):
        """Store current value in memory"""
        try:
            current_value = float(self.display_var.get())
            self.memory.store(current_value)
            messagebox.showinfo("Memory", f"Stored {current_value} in memory")
        except ValueError:
            messagebox.showerror("Error", "Invalid value to store")

    def memory_recall(self):
        """Recall value from memory"""
        value = self.memory.recall()
        self.current_expression = str(value)
        self.display_var.set(str(value))
        self.result_shown = True

    def memory_clear(self):
        """Clear memory"""
        self.memory.clear()
        messagebox.showinfo("Memory", "Memory cleared")
"#;

fn push_create_menu(out: &mut String, stats: bool, history: bool) {
    out.push_str(
        r#"
    def create_menu(self):
        """Create application menu"""
        menubar = tk.Menu(self.root)
        self.root.config(menu=menubar)

        # Tools menu
        tools_menu = tk.Menu(menubar, tearoff=0)
        menubar.add_cascade(label="Tools", menu=tools_menu)
"#,
    );
    if stats {
        out.push_str(
            "        tools_menu.add_command(label=\"Statistics Calculator\", command=self.show_stats_dialog)\n",
        );
    }
    if history {
        out.push_str(
            "        tools_menu.add_command(label=\"Show History\", command=self.show_history)\n",
        );
        out.push_str(
            "        tools_menu.add_command(label=\"Clear History\", command=self.clear_history)\n",
        );
    }
    out.push_str(
        r#"        tools_menu.add_separator()
        tools_menu.add_command(label="About", command=self.show_about)
"#,
    );
}

const STATS_DIALOG: &str = r#"
    def show_stats_dialog(self):
        """Show statistics calculator dialog"""
        data_str = simpledialog.askstring(
            "Statistics",
            "Enter comma-separated numbers:"
        )
        if data_str:
            try:
                stats = calculate_stats(data_str)
                result = "\n".join([f"{k.title()}: {v}" for k, v in stats.items()])
                messagebox.showinfo("Statistics Results", result)
            except Exception as e:
                messagebox.showerror("Error", str(e))
"#;

const HISTORY_METHODS: &str = r#"
    def show_history(self):
        """Show calculation history"""
        history = self.history.get_history()
        if not history:
            messagebox.showinfo("History", "No calculations in history")
            return

        # Create history window
        hist_window = tk.Toplevel(self.root)
        hist_window.title("Calculation History")
        hist_window.geometry("400x300")

        # Create text widget with scrollbar
        text_frame = ttk.Frame(hist_window)
        text_frame.pack(fill='both', expand=True, padx=10, pady=10)

        text_widget = tk.Text(text_frame, wrap='word')
        scrollbar = ttk.Scrollbar(text_frame, orient='vertical', command=text_widget.yview)
        text_widget.configure(yscrollcommand=scrollbar.set)

        # Add history entries
        for entry in history:
            text_widget.insert('end', f"{entry['timestamp']}: {entry['expression']} = {entry['result']}\n")

        text_widget.config(state='disabled')
        text_widget.pack(side='left', fill='both', expand=True)
        scrollbar.pack(side='right', fill='y')

    def clear_history(self):
        """Clear calculation history"""
        self.history.clear()
        messagebox.showinfo("History", "History cleared")
"#;

fn push_apply_theme(out: &mut String, theme: Theme) {
    out.push_str(
        r#"
    def apply_theme(self):
        """Apply visual theme"""
        style = ttk.Style()
"#,
    );
    out.push_str(match theme {
        Theme::Dark => {
            r#"        # Dark theme
        self.root.configure(bg='#2b2b2b')
        style.configure('TFrame', background='#2b2b2b')
        style.configure('TButton', background='#404040', foreground='white')
        style.configure('TLabel', background='#2b2b2b', foreground='white')
"#
        }
        Theme::Colorful => {
            r#"        # Colorful theme
        self.root.configure(bg='#1e3a5f')
        style.configure('TFrame', background='#1e3a5f')
        style.configure('TButton', background='#ff8c42', foreground='#1e3a5f', padding=5)
        style.configure('TLabel', background='#1e3a5f', foreground='#ffd166')
"#
        }
        Theme::Light => {
            r#"        # Light theme (default)
        style.configure('TButton', padding=5)
"#
        }
    });
}

fn push_about(out: &mut String, resolved: &Resolved) {
    let _ = write!(
        out,
        r#"
    def show_about(self):
        """Show about dialog"""
        about_text = """{name}
Version: 1.0.0
Author: {author}

{description}

Generated by calcgen"""
        messagebox.showinfo("About", about_text)
"#,
        name = resolved.project_name(),
        author = resolved.author(),
        description = resolved.description(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcgen_core::domain::{Blueprint, UiStyle};

    fn render(blueprint: Blueprint) -> MainSegment {
        DesktopRenderer.render_main(&blueprint.with_style(UiStyle::Gui).resolve())
    }

    #[test]
    fn window_carries_the_project_name() {
        let main = render(Blueprint::basic().with_project_name("My Calc"));
        assert!(main.body.starts_with("class CalculatorApp:"));
        assert!(main.body.contains("self.root.title(\"My Calc\")"));
        assert!(main.body.contains("self.root.geometry(\"400x600\")"));
        assert!(main.entry.contains("calculator = CalculatorApp()"));
    }

    #[test]
    fn basic_gui_has_no_menu_and_no_function_buttons() {
        let main = render(Blueprint::basic());
        assert!(!main.body.contains("create_menu"));
        assert!(!main.body.contains("self.trig_buttons"));
        assert!(!main.body.contains("self.mem_buttons"));
    }

    #[test]
    fn scientific_dark_gui_uses_six_columns_and_dark_palette() {
        let main = render(Blueprint::scientific().with_theme(Theme::Dark));
        assert!(main.body.contains("for i in range(6):"));
        assert!(main.body.contains("self.root.configure(bg='#2b2b2b')"));
        assert!(main.body.contains("background='#404040'"));
    }

    #[test]
    fn light_theme_is_the_minimal_style() {
        let main = render(Blueprint::basic());
        assert!(main.body.contains("style.configure('TButton', padding=5)"));
        assert!(!main.body.contains("#2b2b2b"));
    }

    #[test]
    fn menu_appears_with_any_advanced_feature() {
        let with_history = render(Blueprint::basic().with_feature(Feature::History));
        assert!(with_history.body.contains("def create_menu(self):"));
        assert!(with_history.body.contains("label=\"Show History\""));
        assert!(!with_history.body.contains("Statistics Calculator"));

        let with_stats = render(Blueprint::basic().with_feature(Feature::Statistical));
        assert!(with_stats.body.contains("label=\"Statistics Calculator\""));
        assert!(with_stats.body.contains("def show_stats_dialog(self):"));
    }

    #[test]
    fn degree_mode_rewrites_trig_calls() {
        let main = render(Blueprint::basic().with_feature(Feature::Trigonometric));
        assert!(main.body.contains("re.sub(pattern, replace_trig, expression)"));

        let without = render(Blueprint::basic());
        assert!(!without.body.contains("replace_trig"));
    }

    #[test]
    fn grid_lines_follow_the_plan() {
        let main = render(Blueprint::basic().with_feature(Feature::Memory));
        assert!(main.body.contains(
            "self.mem_buttons['MS'].grid(row=0, column=0, padx=2, pady=2, sticky='nsew')"
        ));
        assert!(main.body.contains(
            "self.op_buttons['='].grid(row=6, column=0, columnspan=4, padx=2, pady=2, sticky='nsew')"
        ));
    }

    #[test]
    fn gui_main_never_contains_the_repl() {
        let main = render(Blueprint::scientific());
        assert!(!main.body.contains("interactive_mode"));
        assert!(!main.body.contains("input(\"calc> \")"));
    }
}
