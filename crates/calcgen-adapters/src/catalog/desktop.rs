//! Fragment registry for desktop (GUI) calculators.
//!
//! GUI calculators route button input through `safe_eval`, so the registry
//! is smaller than the console one: helpers plus the manager classes the
//! main window delegates to.

use calcgen_core::application::ports::FragmentCatalog;
use calcgen_core::domain::{Feature, Fragment, FragmentDef, Gate, Library, Resolved, fragment};

/// Catalog adapter for GUI calculators.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopCatalog;

impl FragmentCatalog for DesktopCatalog {
    fn fragments_for(&self, resolved: &Resolved) -> Vec<Fragment> {
        fragment::select(DESKTOP_FRAGMENTS, resolved)
    }
}

/// The fixed desktop registry.
pub static DESKTOP_FRAGMENTS: &[FragmentDef] = &[
    FragmentDef {
        fragment: Fragment {
            name: "safe_eval",
            body: r#"def safe_eval(expression):
    """Safely evaluate mathematical expressions"""
    try:
        # Replace common symbols
        expression = expression.replace('^', '**')
        expression = expression.replace('×', '*')
        expression = expression.replace('÷', '/')

        # Create safe evaluation context
        safe_dict = {
            "__builtins__": {},
            "abs": abs, "round": round, "min": min, "max": max,
            "sqrt": math.sqrt, "pi": math.pi, "e": math.e,
            "sin": math.sin, "cos": math.cos, "tan": math.tan,
            "asin": math.asin, "acos": math.acos, "atan": math.atan,
            "log": math.log10, "ln": math.log, "log10": math.log10,
            "exp": math.exp, "pow": pow
        }

        return eval(expression, safe_dict)
    except Exception as e:
        raise ValueError(f"Invalid expression: {str(e)}")"#,
        },
        gates: &[Gate::Feature(Feature::BasicArithmetic)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "angle_conversion",
            body: r#"def deg_to_rad(degrees):
    """Convert degrees to radians"""
    return math.radians(degrees)

def rad_to_deg(radians):
    """Convert radians to degrees"""
    return math.degrees(radians)"#,
        },
        gates: &[Gate::Feature(Feature::Trigonometric)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "safe_log",
            body: r#"def safe_log(x, base=10):
    """Safe logarithm function"""
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
            name: "calculate_stats",
            body: r#"def calculate_stats(data_str):
    """Calculate statistics from comma-separated data"""
    try:
        data = [float(x.strip()) for x in data_str.split(',')]
        return {
            'mean': np.mean(data),
            'median': np.median(data),
            'std': np.std(data),
            'var': np.var(data),
            'min': np.min(data),
            'max': np.max(data)
        }
    except Exception as e:
        raise ValueError(f"Invalid data format: {str(e)}")"#,
        },
        gates: &[
            Gate::Feature(Feature::Statistical),
            Gate::Library(Library::Numpy),
        ],
    },
    FragmentDef {
        fragment: Fragment {
            name: "memory_manager",
            body: r#"class MemoryManager:
    """Handles calculator memory operations"""
    def __init__(self):
        self.memory = 0

    def store(self, value):
        """Store value in memory"""
        self.memory = float(value)

    def recall(self):
        """Recall value from memory"""
        return self.memory

    def clear(self):
        """Clear memory"""
        self.memory = 0

    def add(self, value):
        """Add value to memory"""
        self.memory += float(value)

    def subtract(self, value):
        """Subtract value from memory"""
        self.memory -= float(value)"#,
        },
        gates: &[Gate::Feature(Feature::Memory)],
    },
    FragmentDef {
        fragment: Fragment {
            name: "history_manager",
            body: r#"class HistoryManager:
    """Handles calculation history"""
    def __init__(self, max_entries=100):
        self.history = []
        self.max_entries = max_entries

    def add_entry(self, expression, result):
        """Add calculation to history"""
        entry = {
            'timestamp': datetime.now().strftime('%H:%M:%S'),
            'expression': expression,
            'result': str(result)
        }
        self.history.append(entry)

        # Keep only max_entries
        if len(self.history) > self.max_entries:
            self.history = self.history[-self.max_entries:]

    def get_history(self):
        """Get all history entries"""
        return self.history

    def clear(self):
        """Clear history"""
        self.history = []

    def save_to_file(self, filename):
        """Save history to file"""
        with open(filename, 'w') as f:
            json.dump(self.history, f, indent=2)"#,
        },
        gates: &[Gate::Feature(Feature::History)],
    },
];
