use std::collections::HashMap;

use demlens_core::error::Result;

use crate::message::{Message, MessageKind};

/// Observer invoked for decoded messages.
///
/// Errors are propagated to the caller of the parse; the engine never
/// swallows them.
pub trait Hook {
    fn on_message(&mut self, msg: &Message) -> Result<()>;
}

impl<F> Hook for F
where
    F: FnMut(&Message) -> Result<()>,
{
    fn on_message(&mut self, msg: &Message) -> Result<()> {
        self(msg)
    }
}

/// Registration tier. Internal hooks always run before external ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Engine-owned, registered at construction.
    Internal,
    /// Caller-supplied.
    External,
}

#[derive(Default)]
struct TierHooks {
    by_kind: HashMap<MessageKind, Vec<Box<dyn Hook>>>,
    any: Vec<Box<dyn Hook>>,
}

impl TierHooks {
    fn dispatch(&mut self, msg: &Message) -> Result<()> {
        if let Some(hooks) = self.by_kind.get_mut(&msg.kind()) {
            for hook in hooks.iter_mut() {
                hook.on_message(msg)?;
            }
        }
        for hook in self.any.iter_mut() {
            hook.on_message(msg)?;
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum::<usize>() + self.any.len()
    }
}

/// Registry and dispatcher for message hooks.
///
/// Per tier, kind-keyed hooks run in registration order, then catch-all
/// hooks. No registrations for a kind makes dispatch a no-op.
#[derive(Default)]
pub struct HookRegistry {
    internal: TierHooks,
    external: TierHooks,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut TierHooks {
        match tier {
            Tier::Internal => &mut self.internal,
            Tier::External => &mut self.external,
        }
    }

    /// Append a closure for `kind` (external tier).
    pub fn register<F>(&mut self, kind: MessageKind, f: F)
    where
        F: FnMut(&Message) -> Result<()> + 'static,
    {
        self.register_hook(Tier::External, kind, f);
    }

    /// Append a closure for every kind (external tier).
    pub fn register_any<F>(&mut self, f: F)
    where
        F: FnMut(&Message) -> Result<()> + 'static,
    {
        self.register_any_hook(Tier::External, f);
    }

    pub fn register_hook<H: Hook + 'static>(&mut self, tier: Tier, kind: MessageKind, hook: H) {
        self.tier_mut(tier)
            .by_kind
            .entry(kind)
            .or_default()
            .push(Box::new(hook));
    }

    pub fn register_any_hook<H: Hook + 'static>(&mut self, tier: Tier, hook: H) {
        self.tier_mut(tier).any.push(Box::new(hook));
    }

    /// Kinds with at least one kind-keyed hook, in either tier.
    pub fn registered_kinds(&self) -> Vec<MessageKind> {
        let mut kinds: Vec<MessageKind> = self
            .internal
            .by_kind
            .keys()
            .chain(self.external.by_kind.keys())
            .copied()
            .collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    pub fn len(&self, tier: Tier) -> usize {
        match tier {
            Tier::Internal => self.internal.len(),
            Tier::External => self.external.len(),
        }
    }

    /// Run internal then external hooks for `msg`'s kind.
    pub fn dispatch(&mut self, msg: &Message) -> Result<()> {
        self.internal.dispatch(msg)?;
        self.external.dispatch(msg)
    }
}
