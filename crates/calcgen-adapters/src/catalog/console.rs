//! Fragment registry for console (CLI) calculators.
//!
//! Registry order is emission order: arithmetic, memory, history, then the
//! scientific groups. Bodies are plain function or class definitions with
//! no surrounding blank lines.

use calcgen_core::application::ports::FragmentCatalog;
use calcgen_core::domain::{Feature, Fragment, FragmentDef, Gate, Library, Resolved, fragment};

/// Catalog adapter for CLI calculators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleCatalog;

impl FragmentCatalog for ConsoleCatalog {
    fn fragments_for(&self, resolved: &Resolved) -> Vec<Fragment> {
        fragment::select(CONSOLE_FRAGMENTS, resolved)
    }
}

/// The fixed console registry.
pub static CONSOLE_FRAGMENTS: &[FragmentDef] = &[
    // ── Basic arithmetic ─────────────────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "add",
            body: r#"def add(a, b):
    """Addition operation"""
    return a + b"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "subtract",
            body: r#"def subtract(a, b):
    """Subtraction operation"""
    return a - b"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "multiply",
            body: r#"def multiply(a, b):
    """Multiplication operation"""
    return a * b"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "divide",
            body: r#"def divide(a, b):
    """Division operation"""
    if b == 0:
        raise ValueError("Cannot divide by zero")
    return a / b"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "power",
            body: r#"def power(a, b):
    """Power operation"""
    return a ** b"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "modulo",
            body: r#"def modulo(a, b):
    """Modulo operation"""
    if b == 0:
        raise ValueError("Cannot calculate modulo with zero")
    return a % b"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    // ── Memory ───────────────────────────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "memory_class",
            body: r#"class Memory:
    """Calculator memory functionality"""
    def __init__(self):
        self.value = 0

    def store(self, value):
        """Store value in memory"""
        self.value = value
        return f"Stored {value} in memory"

    def recall(self):
        """Recall value from memory"""
        return self.value

    def clear(self):
        """Clear memory"""
        self.value = 0
        return "Memory cleared"

    def add_to_memory(self, value):
        """Add value to memory"""
        self.value += value
        return f"Added {value} to memory, new value: {self.value}""#,
        },
        gates: &[Gate::Feature(Feature::Memory)],
    },
    // ── History ──────────────────────────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "history_class",
            body: r#"class History:
    """Calculator history functionality"""
    def __init__(self, max_entries=100):
        self.entries = []
        self.max_entries = max_entries

    def add_entry(self, operation, result):
        """Add calculation to history"""
        entry = {
            "timestamp": datetime.now().isoformat(),
            "operation": operation,
            "result": result
        }
        self.entries.append(entry)

        # Keep only max_entries
        if len(self.entries) > self.max_entries:
            self.entries = self.entries[-self.max_entries:]

    def get_history(self, count=10):
        """Get recent history entries"""
        return self.entries[-count:]

    def clear_history(self):
        """Clear calculation history"""
        self.entries = []
        return "History cleared"

    def save_to_file(self, filename="calculator_history.json"):
        """Save history to file"""
        with open(filename, 'w') as f:
            json.dump(self.entries, f, indent=2)
        return f"History saved to {filename}""#,
        },
        gates: &[Gate::Feature(Feature::History)],
    },
    // ── Trigonometric ────────────────────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "sin",
            body: r#"def sin(x, angle_unit="degrees"):
    """Sine function"""
    if angle_unit == "degrees":
        x = math.radians(x)
    return math.sin(x)"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "cos",
            body: r#"def cos(x, angle_unit="degrees"):
    """Cosine function"""
    if angle_unit == "degrees":
        x = math.radians(x)
    return math.cos(x)"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "tan",
            body: r#"def tan(x, angle_unit="degrees"):
    """Tangent function"""
    if angle_unit == "degrees":
        x = math.radians(x)
    return math.tan(x)"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "asin",
            body: r#"def asin(x, angle_unit="degrees"):
    """Arcsine function"""
    result = math.asin(x)
    if angle_unit == "degrees":
        result = math.degrees(result)
    return result"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "acos",
            body: r#"def acos(x, angle_unit="degrees"):
    """Arccosine function"""
    result = math.acos(x)
    if angle_unit == "degrees":
        result = math.degrees(result)
    return result"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "atan",
            body: r#"def atan(x, angle_unit="degrees"):
    """Arctangent function"""
    result = math.atan(x)
    if angle_unit == "degrees":
        result = math.degrees(result)
    return result"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    // ── Logarithmic ──────────────────────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "log",
            body: r#"def log(x, base=10):
    """Logarithm function"""
    if x <= 0:
        raise ValueError("Logarithm input must be positive")
    if base == math.e:
        return math.log(x)
    return math.log(x, base)"#,
        },
        gates: &[Gate::Feature(Feature::Logarithmic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "ln",
            body: r#"def ln(x):
    """Natural logarithm"""
    if x <= 0:
        raise ValueError("Natural logarithm input must be positive")
    return math.log(x)"#,
        },
        gates: &[Gate::Feature(Feature::Logarithmic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "log10",
            body: r#"def log10(x):
    """Base-10 logarithm"""
    if x <= 0:
        raise ValueError("Logarithm input must be positive")
    return math.log10(x)"#,
        },
        gates: &[Gate::Feature(Feature::Logarithmic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "log2",
            body: r#"def log2(x):
    """Base-2 logarithm"""
    if x <= 0:
        raise ValueError("Logarithm input must be positive")
    return math.log2(x)"#,
        },
        gates: &[Gate::Feature(Feature::Logarithmic)],
    },
    // ── Statistical (requires numpy) ─────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "mean",
            body: r#"def mean(data):
    """Calculate mean of data"""
    return np.mean(data)"#,
        },
        gates: &[
            Gate::Feature(Feature::Statistical),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "median",
            body: r#"def median(data):
    """Calculate median of data"""
    return np.median(data)"#,
        },
        gates: &[
            Gate::Feature(Feature::Statistical),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "std",
            body: r#"def std(data):
    """Calculate standard deviation"""
    return np.std(data)"#,
        },
        gates: &[
            Gate::Feature(Feature::Statistical),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "variance",
            body: r#"def variance(data):
    """Calculate variance"""
    return np.var(data)"#,
        },
        gates: &[
            Gate::Feature(Feature::Statistical),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "correlation",
            body: r#"def correlation(x, y):
    """Calculate correlation coefficient"""
    return np.corrcoef(x, y)[0, 1]"#,
        },
        gates: &[
            Gate::Feature(Feature::Statistical),
            Gate::Library(Library::Numpy),
        ],
    },
    // ── Linear algebra (requires numpy) ──────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "matrix_multiply",
            body: r#"def matrix_multiply(a, b):
    """Matrix multiplication"""
    return np.dot(a, b)"#,
        },
        gates: &[
            Gate::Feature(Feature::LinearAlgebra),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "matrix_inverse",
            body: r#"def matrix_inverse(matrix):
    """Matrix inverse"""
    return np.linalg.inv(matrix)"#,
        },
        gates: &[
            Gate::Feature(Feature::LinearAlgebra),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "matrix_determinant",
            body: r#"def matrix_determinant(matrix):
    """Matrix determinant"""
    return np.linalg.det(matrix)"#,
        },
        gates: &[
            Gate::Feature(Feature::LinearAlgebra),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "eigenvalues",
            body: r#"def eigenvalues(matrix):
    """Calculate eigenvalues"""
    return np.linalg.eigvals(matrix)"#,
        },
        gates: &[
            Gate::Feature(Feature::LinearAlgebra),
            Gate::Library(Library::Numpy),
        ],
    },
    // ── Plotting (requires plotly) ───────────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "plot_function",
            body: r#"def plot_function(func_str, x_range=(-10, 10), num_points=100):
    """Plot a mathematical function"""
    x = np.linspace(x_range[0], x_range[1], num_points)
    y = eval(func_str)

    fig = go.Figure()
    fig.add_trace(go.Scatter(x=x, y=y, mode='lines', name=func_str))
    fig.update_layout(title=f"Plot of {func_str}", xaxis_title="x", yaxis_title="y")
    fig.show()"#,
        },
        gates: &[
            Gate::Feature(Feature::Plotting),
            Gate::Library(Library::Plotly),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "plot_data",
            body: r#"def plot_data(x_data, y_data, title="Data Plot"):
    """Plot data points"""
    fig = go.Figure()
    fig.add_trace(go.Scatter(x=x_data, y=y_data, mode='markers+lines'))
    fig.update_layout(title=title, xaxis_title="x", yaxis_title="y")
    fig.show()"#,
        },
        gates: &[
            Gate::Feature(Feature::Plotting),
            Gate::Library(Library::Plotly),
        ],
    },
    // ── Equation solving (requires sympy) ────────────────────────────────
    FragmentDef {
        fragment: Fragment {
            name: "solve_equation",
            body: r#"def solve_equation(equation_str, variable='x'):
    """Solve algebraic equation"""
    x = symbols(variable)
    equation = sym.sympify(equation_str)
    solutions = solve(equation, x)
    return solutions"#,
        },
        gates: &[
            Gate::Feature(Feature::EquationSolver),
            Gate::Library(Library::Sympy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "differentiate",
            body: r#"def differentiate(expr_str, variable='x'):
    """Calculate derivative"""
    x = symbols(variable)
    expr = sym.sympify(expr_str)
    return diff(expr, x)"#,
        },
        gates: &[
            Gate::Feature(Feature::EquationSolver),
            Gate::Library(Library::Sympy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "integrate_symbolic",
            body: r#"def integrate_symbolic(expr_str, variable='x'):
    """Calculate symbolic integral"""
    x = symbols(variable)
    expr = sym.sympify(expr_str)
    return sym_integrate(expr, x)"#,
        },
        gates: &[
            Gate::Feature(Feature::EquationSolver),
            Gate::Library(Library::Sympy),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use calcgen_core::domain::Blueprint;
    use std::collections::HashSet;

    #[test]
    fn registry_is_coherent() {
        let mut names = HashSet::new();
        for def in CONSOLE_FRAGMENTS {
            assert!(
                names.insert(def.fragment.name),
                "duplicate fragment name: {}",
                def.fragment.name
            );
            assert!(!def.gates.is_empty(), "{} has no gates", def.fragment.name);
            assert!(
                def.fragment.body.starts_with("def ") || def.fragment.body.starts_with("class "),
                "{} body must be a definition",
                def.fragment.name
            );
            assert!(
                !def.fragment.body.ends_with('\n'),
                "{} body must not carry a trailing newline",
                def.fragment.name
            );
        }
    }

    #[test]
    fn numpy_fragments_never_fire_without_numpy() {
        for def in CONSOLE_FRAGMENTS {
            if def.fragment.body.contains("np.") {
                assert!(
                    def.gates.contains(&Gate::Library(Library::Numpy)),
                    "{} uses numpy but is not gated on it",
                    def.fragment.name
                );
            }
        }
    }

    #[test]
    fn basic_blueprint_selects_arithmetic_only() {
        let resolved = Blueprint::basic().resolve();
        let catalog = ConsoleCatalog;
        let names: Vec<&str> = catalog
            .fragments_for(&resolved)
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            vec!["add", "subtract", "multiply", "divide", "power", "modulo"]
        );
    }

    #[test]
    fn memory_feature_adds_the_memory_class() {
        let resolved = Blueprint::basic().with_feature(Feature::Memory).resolve();
        let catalog = ConsoleCatalog;
        let names: Vec<&str> = catalog
            .fragments_for(&resolved)
            .iter()
            .map(|f| f.name)
            .collect();
        assert!(names.contains(&"memory_class"));
        assert!(!names.contains(&"history_class"));
    }

    #[test]
    fn scientific_blueprint_selects_the_full_stack() {
        let resolved = Blueprint::scientific().resolve();
        let catalog = ConsoleCatalog;
        let names: Vec<&str> = catalog
            .fragments_for(&resolved)
            .iter()
            .map(|f| f.name)
            .collect();
        for expected in ["sin", "log", "mean", "matrix_multiply", "memory_class"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
        // No plotting feature in the scientific preset.
        assert!(!names.contains(&"plot_function"));
    }
}
