//! End-to-end program tests, one per scenario.

use brewin_core::{BrewinError, CapturedOutput, ErrorKind, InputSource, OutputSink, QueuedInput};

#[derive(Default)]
struct TestHost {
    input: QueuedInput,
    output: CapturedOutput,
}

impl TestHost {
    fn with_input(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { input: QueuedInput::new(lines), output: CapturedOutput::default() }
    }
}

impl InputSource for TestHost {
    fn next_input(&mut self) -> Option<String> {
        self.input.next_input()
    }
}

impl OutputSink for TestHost {
    fn emit(&mut self, line: &str) {
        self.output.emit(line);
    }
}

fn run(source: &str, host: &mut TestHost) -> Result<Option<brewin_interp::value::Value>, BrewinError> {
    brewin_interp::run_source(source, host)
}

#[test]
fn factorial_with_input() {
    let source = r#"
    (class main
      (field int n 0)
      (field int r 1)
      (method void main ()
        (begin
          (print "Enter a number: ")
          (inputi n)
          (let ((int result (call me factorial n)))
            (print n " factorial is " result))))
      (method int factorial ((int n))
        (begin
          (set r 1)
          (while (> n 0)
            (begin
              (set r (* r n))
              (set n (- n 1))))
          (return r))))
    "#;

    let mut host = TestHost::with_input(["5"]);
    run(source, &mut host).expect("program should run cleanly");
    assert_eq!(host.output.lines, vec!["Enter a number: ".to_string(), "5 factorial is 120".to_string()]);
}

#[test]
fn inheritance_and_polymorphism_dispatch_on_runtime_class() {
    let source = r#"
    (class person
      (field string name "jane")
      (method void say () (print name " says hi")))
    (class student inherits person
      (method void say () (print "Can I have a project extension?")))
    (class main
      (field person p null)
      (method void main ()
        (begin
          (set p (new student))
          (call p say))))
    "#;

    let mut host = TestHost::default();
    run(source, &mut host).expect("program should run cleanly");
    assert_eq!(host.output.lines, vec!["Can I have a project extension?".to_string()]);
}

#[test]
fn super_dispatch_preserves_receiver_identity() {
    let source = r#"
    (class mammal
      (method mammal getMe () (return me)))
    (class person inherits mammal
      (method person getMe () (return (call super getMe))))
    (class student inherits person
      (method student getMe () (return (call super getMe))))
    (class main
      (field student s null)
      (method void main ()
        (begin
          (set s (new student))
          (print (== s (call s getMe))))))
    "#;

    let mut host = TestHost::default();
    run(source, &mut host).expect("program should run cleanly");
    assert_eq!(host.output.lines, vec!["true".to_string()]);
}

#[test]
fn try_throw_with_string_concatenation() {
    let source = r#"
    (class main
      (method void main ()
        (try
          (throw (+ "Hello," " World!"))
          (print exception))))
    "#;

    let mut host = TestHost::default();
    run(source, &mut host).expect("program should run cleanly");
    assert_eq!(host.output.lines, vec!["Hello, World!".to_string()]);
}

#[test]
fn uncaught_exception_surfaces_as_fault_on_the_throw_line() {
    let source = "\n(class main\n  (method void main ()\n    (throw \"x\")))\n";

    let mut host = TestHost::default();
    let err = run(source, &mut host).expect_err("uncaught exception should terminate the program");
    assert_eq!(err.kind, ErrorKind::Fault);
    assert_eq!(err.line, 4);
}

#[test]
fn template_instantiation_type_checks_its_argument() {
    let valid = r#"
    (tclass box (T) (field T v) (method T get () (return v)))
    (class main
      (field box@int b null)
      (method void main () (print "loaded")))
    "#;
    let mut host = TestHost::default();
    run(valid, &mut host).expect("box@int should type-check");

    let invalid = "\n(tclass box (T) (field T v) (method T get () (return v)))\n(class main\n  (field box@nonesuch b null)\n  (method void main () (begin)))\n";
    let mut host = TestHost::default();
    let err = run(invalid, &mut host).expect_err("box@nonesuch should fail to load");
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.line, 4);
}

#[test]
fn arithmetic_closure_holds_modulo_host_int_width_for_sample_pairs() {
    let pairs: [(i64, i64); 6] = [(2, 3), (-5, 7), (0, 0), (i64::MAX, 1), (i64::MIN, -1), (1_000_000, 1_000_000)];
    for (a, b) in pairs {
        let source = format!(
            "(class main (method void main () (print (+ {a} {b}))))"
        );
        let mut host = TestHost::default();
        run(&source, &mut host).expect("arithmetic program should run");
        let expected = a.wrapping_add(b).to_string();
        assert_eq!(host.output.lines, vec![expected]);
    }
}

#[test]
fn string_concatenation_is_associative_for_sample_literals() {
    let triples = [("a", "b", "c"), ("", "x", "y"), ("Hello,", " ", "World!")];
    for (a, b, c) in triples {
        let left = format!(r#"(class main (method void main () (print (+ (+ "{a}" "{b}") "{c}"))))"#);
        let right = format!(r#"(class main (method void main () (print (+ "{a}" (+ "{b}" "{c}")))))"#);

        let mut host_left = TestHost::default();
        run(&left, &mut host_left).expect("left-assoc program should run");
        let mut host_right = TestHost::default();
        run(&right, &mut host_right).expect("right-assoc program should run");

        assert_eq!(host_left.output.lines, host_right.output.lines);
        assert_eq!(host_left.output.lines, vec![format!("{a}{b}{c}")]);
    }
}

#[test]
fn object_equality_is_reflexive_for_non_null_instances() {
    let source = r#"
    (class widget (field int id 0))
    (class main
      (field widget w null)
      (method void main ()
        (begin
          (set w (new widget))
          (print (== w w)))))
    "#;
    let mut host = TestHost::default();
    run(source, &mut host).expect("program should run cleanly");
    assert_eq!(host.output.lines, vec!["true".to_string()]);
}
