//! Interpreter throughput on the factorial scenario (spec §8 scenario
//! 1): parse once, then re-run the loop-and-call-heavy `main` body
//! repeatedly, the same shape as the teacher's own
//! `angelscript/benches/module_benchmarks.rs`.

use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brewin_ast::Parser;
use brewin_core::{CapturedOutput, InputSource, OutputSink, QueuedInput};

const PROGRAM: &str = r#"
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

#[derive(Default)]
struct BenchHost {
    input: QueuedInput,
    output: CapturedOutput,
}

impl InputSource for BenchHost {
    fn next_input(&mut self) -> Option<String> {
        self.input.next_input()
    }
}

impl OutputSink for BenchHost {
    fn emit(&mut self, line: &str) {
        self.output.emit(line);
    }
}

fn run_factorial() {
    let arena = Bump::new();
    let forms = Parser::parse(PROGRAM, &arena).expect("benchmark program must parse");
    let mut host = BenchHost { input: QueuedInput::new(["20"]), output: CapturedOutput::default() };
    brewin_interp::run_forms(forms, &arena, &mut host).expect("benchmark program must run");
    black_box(host.output.lines.len());
}

fn factorial_benchmark(c: &mut Criterion) {
    c.bench_function("factorial end-to-end", |b| b.iter(run_factorial));
}

criterion_group!(benches, factorial_benchmark);
criterion_main!(benches);
