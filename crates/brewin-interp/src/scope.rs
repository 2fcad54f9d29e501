//! Lexical scope management for `let` blocks (spec §3, §4.7).
//!
//! Frames form a parent-pointer chain; lookup walks innermost-first.
//! Unlike the teacher's `LocalScope` (which tracks compile-time stack
//! slots), a `brewin` frame owns its variables directly since there is
//! no bytecode stack to allocate — the tree-walking evaluator reads and
//! writes [`crate::variable::Variable`]s in place.

use rustc_hash::FxHashMap;

use crate::variable::Variable;

/// A single `let` scope's local variables, plus a link to the enclosing
/// scope.
#[derive(Debug, Default)]
struct Frame {
    locals: FxHashMap<String, Variable>,
}

/// The chain of lexical frames active for one statement-evaluation
/// invocation. A fresh, empty chain is created for each method
/// invocation (spec §4.5); every `let` pushes one frame and pops it on
/// every exit path, including through a propagated exception or return.
#[derive(Debug, Default)]
pub struct FrameChain {
    frames: Vec<Frame>,
}

impl FrameChain {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self) {
        self.frames.push(Frame::default());
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// Declares a new local in the innermost frame. Returns `false` if a
    /// local with this name already exists in that same frame (spec
    /// §4.7: "duplicate local in the same frame -> NAME error").
    pub fn declare(&mut self, var: Variable) -> bool {
        let frame = self.frames.last_mut().expect("declare called outside any let frame");
        if frame.locals.contains_key(&var.name) {
            return false;
        }
        frame.locals.insert(var.name.clone(), var);
        true
    }

    /// Looks up a local by name, innermost frame first.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.frames.iter().rev().find_map(|f| f.locals.get(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.frames.iter_mut().rev().find_map(|f| f.locals.get_mut(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClassRegistry;
    use crate::value::Value;
    use bumpalo::Bump;

    fn var(registry: &mut ClassRegistry, name: &str, v: i64) -> Variable {
        Variable::create(registry, name, "int", Value::int(v), 1).unwrap()
    }

    #[test]
    fn inner_frame_shadows_outer() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let mut chain = FrameChain::new();
        chain.push();
        chain.declare(var(&mut registry, "x", 1));
        chain.push();
        chain.declare(var(&mut registry, "x", 2));
        assert_eq!(chain.get("x").unwrap().get().as_int(), Some(2));
        chain.pop();
        assert_eq!(chain.get("x").unwrap().get().as_int(), Some(1));
        chain.pop();
        assert!(chain.get("x").is_none());
    }

    #[test]
    fn duplicate_local_in_same_frame_rejected() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let mut chain = FrameChain::new();
        chain.push();
        assert!(chain.declare(var(&mut registry, "x", 1)));
        assert!(!chain.declare(var(&mut registry, "x", 2)));
    }

    #[test]
    fn pop_removes_all_resolvability_for_its_locals() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let mut chain = FrameChain::new();
        chain.push();
        chain.declare(var(&mut registry, "y", 9));
        chain.pop();
        assert!(chain.get("y").is_none());
    }
}
