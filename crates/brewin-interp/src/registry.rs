//! The class registry: program loading (spec §4.1), template
//! compilation/memoization (spec §4.8), and object construction (spec
//! §4.4).

use bumpalo::Bump;
use rustc_hash::{FxHashMap, FxHashSet};

use brewin_ast::Node;
use brewin_core::{BrewinError, BrewinResult, Line};

use crate::class::{ClassDef, FieldDef, Instance, Literal};
use crate::method::{Formal, Method};
use crate::template::{mangled_name, substitution::substitute, TemplateDef};
use crate::types::{DeclaredType, TYPE_CONCAT_CHAR};
use crate::value::ObjectRef;

/// Owns every registered class and template for one program run. Holds
/// a borrow of the arena that backs the parsed AST so that template
/// instantiation's substituted nodes share the same `'ast` lifetime as
/// the original source (see `brewin-ast`'s doc comment on why this
/// avoids a self-referential struct).
pub struct ClassRegistry<'ast> {
    arena: &'ast Bump,
    classes: FxHashMap<String, ClassDef<'ast>>,
    templates: FxHashMap<String, TemplateDef<'ast>>,
}

impl<'ast> ClassRegistry<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena, classes: FxHashMap::default(), templates: FxHashMap::default() }
    }

    pub fn lookup_own_method(&self, class: &str, name: &str) -> Option<&Method<'ast>> {
        self.classes.get(class).and_then(|c| c.methods.get(name))
    }

    pub fn parent_of(&self, class: &str) -> Option<String> {
        self.classes.get(class).and_then(|c| c.parent.clone())
    }

    pub fn class(&self, name: &str) -> Option<&ClassDef<'ast>> {
        self.classes.get(name)
    }

    /// `C.isInstance(P)`-style check: is `child` `ancestor` itself, or
    /// does its parent chain reach it transitively (spec §8 invariant)?
    pub fn is_subclass(&self, child: &str, ancestor: &str) -> bool {
        let mut current = Some(child.to_string());
        while let Some(name) = current {
            if name == ancestor {
                return true;
            }
            current = self.parent_of(&name);
        }
        false
    }

    /// Validates that `name` names a known type usable in a field,
    /// formal, or variable declaration, compiling a template
    /// instantiation on demand. TYPE error if it names nothing known
    /// (spec §4.1, §4.8).
    pub fn ensure_known_class_type(&mut self, name: &str, line: Line) -> BrewinResult<()> {
        if self.classes.contains_key(name) {
            return Ok(());
        }
        if name.contains(TYPE_CONCAT_CHAR) {
            let mut segments = name.split(TYPE_CONCAT_CHAR);
            let base = segments.next().unwrap_or("");
            let type_args: Vec<String> = segments.map(str::to_string).collect();
            self.compile_template(base, &type_args, line)?;
            return Ok(());
        }
        Err(BrewinError::type_error(format!("unknown class '{name}'"), line))
    }

    /// Compiles `template_name@arg1@arg2…` if not already memoized,
    /// returning the mangled class name. Each type argument must itself
    /// be a known type (spec §4.8).
    pub fn compile_template(&mut self, template_name: &str, type_args: &[String], line: Line) -> BrewinResult<String> {
        let mangled = mangled_name(template_name, type_args);
        if self.classes.contains_key(&mangled) {
            log::debug!("template '{mangled}' already memoized");
            return Ok(mangled);
        }
        let template = self
            .templates
            .get(template_name)
            .cloned()
            .ok_or_else(|| BrewinError::type_error(format!("unknown template '{template_name}'"), line))?;
        if template.type_params.len() != type_args.len() {
            return Err(BrewinError::type_error(
                format!(
                    "template '{template_name}' expects {} type argument(s), got {}",
                    template.type_params.len(),
                    type_args.len()
                ),
                line,
            ));
        }
        for arg in type_args {
            DeclaredType::parse(arg, self, line, false)?;
        }

        let mut bindings = FxHashMap::default();
        for (param, arg) in template.type_params.iter().zip(type_args.iter()) {
            bindings.insert(param.as_str(), arg.as_str());
        }
        let substituted: Vec<Node<'ast>> =
            template.members.iter().map(|m| substitute(*m, &bindings, self.arena)).collect();

        log::debug!("instantiating template '{template_name}' as '{mangled}'");
        let mut class = ClassDef::new(mangled.clone(), None);
        class.template_origin = Some(template_name.to_string());
        self.populate_members(&mut class, &substituted)?;
        self.classes.insert(mangled.clone(), class);
        Ok(mangled)
    }

    /// Runs the two-pass loader described in spec §4.1: forward-declare
    /// every class/template name, then build each definition's body.
    pub fn load_program(&mut self, forms: &[Node<'ast>]) -> BrewinResult<()> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for form in forms {
            let (head, name, line) = self.form_header(form)?;
            if !seen.insert(name.clone()) {
                return Err(BrewinError::type_error(format!("duplicate class/template name '{name}'"), line));
            }
            match head {
                "class" => {
                    self.classes.insert(name.clone(), ClassDef::new(name, None));
                }
                "tclass" => {
                    self.templates.insert(name.clone(), TemplateDef { name, type_params: Vec::new(), members: &[] });
                }
                other => return Err(BrewinError::syntax(format!("unrecognized top-level form '{other}'"), line)),
            }
        }

        for form in forms {
            let items = form.as_list().expect("validated as a list in the first pass");
            match items[0].text().unwrap() {
                "class" => self.build_class(items, form.line())?,
                "tclass" => self.build_template(items, form.line())?,
                _ => unreachable!("validated in the first pass"),
            }
        }
        Ok(())
    }

    fn form_header<'n>(&self, form: &'n Node<'ast>) -> BrewinResult<(&'ast str, String, Line)> {
        let line = form.line();
        let items = form.as_list().ok_or_else(|| BrewinError::syntax("top-level form must be a list", line))?;
        let head = items.first().and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected a form head", line))?;
        let name = items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected a name", line))?;
        Ok((head, name.to_string(), line))
    }

    fn build_class(&mut self, items: &'ast [Node<'ast>], line: Line) -> BrewinResult<()> {
        let name = items[1].text().ok_or_else(|| BrewinError::syntax("expected class name", line))?.to_string();
        let mut idx = 2;
        let mut parent = None;
        if let Some(tok) = items.get(2).and_then(|n| n.text()) {
            if tok == "inherits" {
                let parent_name = items.get(3).and_then(|n| n.text()).ok_or_else(|| {
                    BrewinError::syntax("expected parent class name after 'inherits'", line)
                })?;
                if !self.classes.contains_key(parent_name) {
                    return Err(BrewinError::type_error(format!("unknown parent class '{parent_name}'"), line));
                }
                parent = Some(parent_name.to_string());
                idx = 4;
            }
        }
        let mut class = ClassDef::new(name.clone(), parent);
        self.populate_members(&mut class, &items[idx..])?;
        self.classes.insert(name, class);
        Ok(())
    }

    fn build_template(&mut self, items: &'ast [Node<'ast>], line: Line) -> BrewinResult<()> {
        let name = items[1].text().ok_or_else(|| BrewinError::syntax("expected template name", line))?.to_string();
        let param_list = items.get(2).and_then(|n| n.as_list()).ok_or_else(|| {
            BrewinError::syntax("expected a type-parameter list", line)
        })?;
        let type_params: Vec<String> = param_list
            .iter()
            .map(|n| n.text().map(str::to_string).ok_or_else(|| BrewinError::syntax("type parameter must be a name", line)))
            .collect::<BrewinResult<_>>()?;
        self.templates.insert(name.clone(), TemplateDef { name, type_params, members: &items[3..] });
        Ok(())
    }

    fn populate_members(&mut self, class: &mut ClassDef<'ast>, members: &'ast [Node<'ast>]) -> BrewinResult<()> {
        for member in members {
            let items = member.as_list().ok_or_else(|| BrewinError::syntax("expected a member form", member.line()))?;
            let line = member.line();
            let head = items.first().and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected a member head", line))?;
            match head {
                "field" => self.add_field(class, items, line)?,
                "method" => self.add_method(class, items, line)?,
                other => return Err(BrewinError::syntax(format!("unrecognized member form '{other}'"), line)),
            }
        }
        Ok(())
    }

    fn add_field(&mut self, class: &mut ClassDef<'ast>, items: &'ast [Node<'ast>], line: Line) -> BrewinResult<()> {
        let type_text = items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected field type", line))?;
        let name = items.get(2).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected field name", line))?;
        if class.fields.iter().any(|f| f.name == name) {
            return Err(BrewinError::name_error(format!("duplicate field '{name}' in class '{}'", class.name), line));
        }
        let declared_type = DeclaredType::parse(type_text, self, line, false)?;
        let initial = match items.get(3) {
            Some(node) => {
                let text = node.text().ok_or_else(|| BrewinError::syntax("expected a literal initializer", line))?;
                Some(Literal::parse(text).ok_or_else(|| BrewinError::syntax(format!("invalid literal '{text}'"), line))?)
            }
            None => None,
        };
        class.fields.push(FieldDef { name: name.to_string(), declared_type, initial });
        Ok(())
    }

    fn add_method(&mut self, class: &mut ClassDef<'ast>, items: &'ast [Node<'ast>], line: Line) -> BrewinResult<()> {
        let return_type_text = items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected return type", line))?;
        let name = items.get(2).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected method name", line))?;
        if class.methods.contains_key(name) {
            return Err(BrewinError::name_error(format!("duplicate method '{name}' in class '{}'", class.name), line));
        }
        let formal_list = items.get(3).and_then(|n| n.as_list()).ok_or_else(|| BrewinError::syntax("expected a formal list", line))?;
        let body = *items.get(4).ok_or_else(|| BrewinError::syntax("expected a method body", line))?;

        let return_type = DeclaredType::parse(return_type_text, self, line, true)?;
        let mut formals = Vec::with_capacity(formal_list.len());
        let mut seen_formals: FxHashSet<&str> = FxHashSet::default();
        for formal_node in formal_list {
            let formal_items = formal_node.as_list().ok_or_else(|| BrewinError::syntax("expected (Type name)", line))?;
            let ftype = formal_items.first().and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected formal type", line))?;
            let fname = formal_items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected formal name", line))?;
            if !seen_formals.insert(fname) {
                return Err(BrewinError::name_error(format!("duplicate parameter '{fname}'"), line));
            }
            let declared_type = DeclaredType::parse(ftype, self, line, false)?;
            formals.push(Formal { name: fname.to_string(), declared_type });
        }

        log::debug!("registered method '{name}' on class '{}'", class.name);
        class.methods.insert(name.to_string(), Method { name: name.to_string(), return_type, formals, body });
        Ok(())
    }

    /// `new C` (spec §4.4): walks `C`'s parent chain root-first so a
    /// child's field initializer shadows its parent's, building the
    /// complete field set in one pass without requiring parents to be
    /// declared before children.
    pub fn new_instance(&mut self, class_name: &str, line: Line) -> BrewinResult<ObjectRef> {
        self.ensure_known_class_type(class_name, line)?;
        let mut chain = Vec::new();
        let mut current = Some(class_name.to_string());
        while let Some(name) = current {
            let def = self.classes.get(&name).ok_or_else(|| BrewinError::type_error(format!("unknown class '{name}'"), line))?;
            chain.push(name.clone());
            current = def.parent.clone();
        }

        let mut instance = Instance::new(class_name.to_string());
        for class_name in chain.into_iter().rev() {
            let fields: Vec<FieldDef> = self.classes.get(&class_name).unwrap().fields.clone();
            for field in fields {
                let var = crate::variable::Variable::with_declared_type(
                    self,
                    field.name.clone(),
                    field.declared_type.clone(),
                    field.initial_value(),
                    line,
                )?;
                instance.fields.insert(field.name, var);
            }
        }
        Ok(ObjectRef::new(instance))
    }
}
