//! Classpath scope management
//!
//! Builds the isolated classpath of a generation run and installs it, together
//! with the configured system properties, for exactly the duration of the run.
//! `ScopedContext` restores whatever was active before on drop, so teardown
//! runs on success, on error and on unwinding alike.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::domain::entities::ProjectDescriptor;
use crate::domain::value_objects::{ClasspathContext, ClasspathEntry};
use crate::error::{RulegenError, RulegenResult};

/// Assemble the classpath for `project`.
///
/// Dependencies outside the compile + runtime scopes and dependencies without
/// a resolved file are skipped. Any declared file that does not exist aborts
/// the whole assembly. The compiled-output directory is appended last and
/// may not exist yet.
pub fn resolve_classpath(project: &ProjectDescriptor) -> RulegenResult<ClasspathContext> {
    let mut context = ClasspathContext::new();

    for dependency in project
        .dependencies()
        .iter()
        .filter(|d| d.scope.on_generation_classpath())
    {
        let Some(path) = &dependency.path else {
            continue;
        };
        let absolute = project.root().join(path);
        let resolved = absolute
            .canonicalize()
            .map_err(|_| RulegenError::UnresolvableClasspathEntry {
                artifact: dependency.identity.to_string(),
                path: absolute.clone(),
            })?;
        let entry = if resolved.is_dir() {
            ClasspathEntry::Directory(resolved)
        } else {
            ClasspathEntry::Archive(resolved)
        };
        if !context.push(entry) {
            tracing::debug!(artifact = %dependency.identity, "duplicate classpath entry skipped");
        }
    }

    let output = project.root().join(project.output_dir());
    let output = output.canonicalize().unwrap_or(output);
    context.push(ClasspathEntry::Directory(output));

    Ok(context)
}

#[derive(Debug, Default)]
struct SlotState {
    current: Arc<ClasspathContext>,
    active: bool,
}

/// Holder of the "current" resolution context.
///
/// The binary uses [`ContextSlot::global`]; tests create their own slot.
#[derive(Debug, Default)]
pub struct ContextSlot {
    state: Mutex<SlotState>,
}

impl ContextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide slot.
    pub fn global() -> &'static ContextSlot {
        static GLOBAL: OnceLock<ContextSlot> = OnceLock::new();
        GLOBAL.get_or_init(ContextSlot::new)
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Context visible right now.
    pub fn current(&self) -> Arc<ClasspathContext> {
        Arc::clone(&self.lock().current)
    }

    pub fn is_active(&self) -> bool {
        self.lock().active
    }

    /// Install `context` and `properties` until the returned guard drops.
    ///
    /// Fails with `ContextBusy` if a scope is already active on this slot;
    /// nothing is changed in that case.
    pub fn enter(
        &self,
        context: ClasspathContext,
        properties: &BTreeMap<String, String>,
    ) -> RulegenResult<ScopedContext<'_>> {
        for (key, value) in properties {
            validate_property(key, value)?;
        }

        let context = Arc::new(context);
        let previous = {
            let mut state = self.lock();
            if state.active {
                return Err(RulegenError::ContextBusy);
            }
            state.active = true;
            std::mem::replace(&mut state.current, Arc::clone(&context))
        };

        let mut saved_env = Vec::with_capacity(properties.len());
        for (key, value) in properties {
            saved_env.push((key.clone(), std::env::var_os(key)));
            std::env::set_var(key, value);
        }

        tracing::debug!(entries = context.len(), "classpath scope entered");
        Ok(ScopedContext {
            slot: self,
            previous: Some(previous),
            context,
            saved_env,
        })
    }
}

fn validate_property(key: &str, value: &str) -> RulegenResult<()> {
    let reason = if key.is_empty() {
        Some("key is empty")
    } else if key.contains('=') {
        Some("key contains '='")
    } else if key.contains('\0') || value.contains('\0') {
        Some("contains a NUL byte")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(RulegenError::InvalidProperty {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Active classpath scope; dropping it restores the previous state.
#[derive(Debug)]
pub struct ScopedContext<'a> {
    slot: &'a ContextSlot,
    previous: Option<Arc<ClasspathContext>>,
    context: Arc<ClasspathContext>,
    saved_env: Vec<(String, Option<OsString>)>,
}

impl ScopedContext<'_> {
    pub fn context(&self) -> &ClasspathContext {
        &self.context
    }
}

impl Drop for ScopedContext<'_> {
    fn drop(&mut self) {
        for (key, value) in self.saved_env.drain(..).rev() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }

        let mut state = self.slot.lock();
        if let Some(previous) = self.previous.take() {
            state.current = previous;
        }
        state.active = false;
        tracing::debug!("classpath scope exited");
    }
}
