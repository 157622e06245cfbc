//! Tests for the Python-facing classes
//!
//! Each test registers the extension module into a fresh namespace and runs
//! Python code against it. Assertion failures surface as Python exceptions.

use gmxpy_core_rs::ffi;
use pyo3::prelude::*;

fn run_python(code: &str) {
    Python::with_gil(|py| {
        let result = (|| -> PyResult<()> {
            let m = PyModule::new_bound(py, "gmxpy_core_rs")?;
            ffi::register(&m)?;
            let globals = m.dict().copy()?;
            globals.set_item("__builtins__", py.import_bound("builtins")?)?;
            py.run_bound(code, Some(&globals), None)
        })();
        if let Err(err) = result {
            let traceback = err
                .traceback_bound(py)
                .and_then(|tb| tb.format().ok())
                .unwrap_or_default();
            panic!("Python code failed: {}\n{}", err, traceback);
        }
    });
}

// ============================================================================
// Status
// ============================================================================

#[test]
fn test_status_truthiness() {
    run_python(
        r#"
assert not Status()
assert not Status().success()
assert Status(True).success()
assert Status(True)
assert not Status(False).success()
"#,
    );
}

#[test]
fn test_status_message() {
    run_python(
        r#"
status = Status(False, "could not open topol.tpr")
assert status.message == "could not open topol.tpr", status.message
assert Status().message is None
assert Status(True, "ignored").message is None
assert repr(status) == 'Status(False, "could not open topol.tpr")', repr(status)
assert str(Status(True)) == "success"
"#,
    );
}

#[test]
fn test_status_copy_and_json() {
    run_python(
        r#"
import copy
status = Status(False, "disk full")
assert copy.copy(status) == status
assert copy.deepcopy(status) == status
assert status_from_json(status.to_json()) == status
assert status_from_json('{"success": true}').success()
"#,
    );
}

// ============================================================================
// Module
// ============================================================================

#[test]
fn test_base_module_info_is_empty() {
    run_python(
        r#"
m = Module()
assert m.info() == ""
assert str(m) == ""
assert repr(m) == '<Module info="">', repr(m)
"#,
    );
}

#[test]
fn test_subclass_with_constructor_arguments() {
    run_python(
        r#"
class Restraint(Module):
    def __init__(self, k, label="pull"):
        super().__init__()
        self.k = k
        self.label = label

    def info(self):
        return f"Restraint({self.label}, k={self.k})"

r = Restraint(500.0, label="com")
assert r.info() == "Restraint(com, k=500.0)"
assert str(r) == r.info()
assert str(r) == str(r)
"#,
    );
}

#[test]
fn test_raising_info_override_falls_back_to_empty() {
    run_python(
        r#"
class Broken(Module):
    def info(self):
        raise RuntimeError("no engine attached")

class NotAString(Module):
    def info(self):
        return 42

assert str(Broken()) == ""
assert str(NotAString()) == ""
"#,
    );
}

#[test]
fn test_copies_keep_subclass_type() {
    run_python(
        r#"
import copy

class Restraint(Module):
    def __init__(self, k):
        super().__init__()
        self.k = k
        self.history = [k]

    def info(self):
        return f"Restraint(k={self.k})"

r = Restraint(5.0)
shallow = copy.copy(r)
deep = copy.deepcopy(r)

for c in (shallow, deep):
    assert type(c) is Restraint
    assert str(c) == "Restraint(k=5.0)"
    assert c is not r

assert shallow.history is r.history
assert deep.history is not r.history
assert deep.history == r.history
"#,
    );
}

#[test]
fn test_copy_with_foreign_new_raises_api_error() {
    run_python(
        r#"
import copy

class Detached(Module):
    def __new__(cls, *args):
        return super().__new__(cls) if args else object()

    def __init__(self, *args):
        super().__init__()

d = Detached("bound")
assert type(d) is Detached
try:
    copy.copy(d)
except ApiError as err:
    assert isinstance(err, GmxError)
    assert "Detached.__new__" in str(err)
else:
    raise AssertionError("expected ApiError")
"#,
    );
}

// ============================================================================
// Options and exceptions
// ============================================================================

#[test]
fn test_options_from_keywords() {
    run_python(
        r#"
options = Options(filename="traj.trr", max_frames=10)
assert str(options.filename) == "traj.trr"
assert options.first_frame == 0
assert options.max_frames == 10
assert Options.from_json(options.to_json()).max_frames == 10
"#,
    );
}

#[test]
fn test_options_empty_filename_raises_usage_error() {
    run_python(
        r#"
try:
    Options(filename="")
except UsageError as err:
    assert isinstance(err, GmxError)
    assert "filename" in str(err)
else:
    raise AssertionError("expected UsageError")
"#,
    );
}

#[test]
fn test_options_missing_filename_raises_value_error() {
    run_python(
        r#"
try:
    Options()
except ValueError as err:
    assert "filename" in str(err)
else:
    raise AssertionError("expected ValueError")
"#,
    );
}

#[test]
fn test_exception_hierarchy() {
    run_python(
        r#"
for exc in (UsageError, ApiError, FeatureNotAvailableError, EngineError):
    assert issubclass(exc, GmxError)
assert issubclass(GmxError, Exception)
"#,
    );
}
