//! Traversal and comparison across a container chain.
//!
//! A chain is the sequence of container links formed through [`Cause`], newest
//! first, optionally ending in a native error. A native error may itself wrap a
//! container further down; the walk follows `source()` to find it.
use core::error::Error;
use core::ptr;

use smallvec::SmallVec;

use super::{Cause, Container};

/// Iterator over the container links of a chain, outermost first.
#[derive(Debug, Clone)]
pub struct Links<'a> {
    next: Option<&'a Container>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Container;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_container();
        Some(current)
    }
}

impl core::iter::FusedIterator for Links<'_> {}

/// Returns `true` when `target` is `error` itself or any error in its
/// `source()` chain, by identity. Containers found in the chain compare with
/// their own [`Container::is`].
fn native_chain_is(error: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if ptr::addr_eq(err as *const dyn Error, target as *const dyn Error) {
            return true;
        }
        if let Some(container) = err.downcast_ref::<Container>() {
            return container.is(target);
        }
        current = err.source();
    }
    false
}

impl Container {
    /// Returns the innermost native (non-container) cause, peeling away every
    /// container link. `None` when the chain holds no native error.
    ///
    /// This is also what [`Error::source`] reports, so code walking a standard
    /// error chain never sees the intermediate container layers.
    pub fn unwrap_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        let mut link = self;
        loop {
            match link.cause.as_ref()? {
                Cause::Container(next) => link = &**next,
                Cause::Native(native) => return Some(native.as_ref()),
            }
        }
    }

    /// Returns the next container link of the chain.
    ///
    /// A container cause is returned directly; for a native cause, its
    /// `source()` chain is searched for a wrapped container.
    pub fn next_container(&self) -> Option<&Container> {
        match self.cause.as_ref()? {
            Cause::Container(next) => Some(&**next),
            Cause::Native(native) => {
                let mut source = native.source();
                while let Some(err) = source {
                    if let Some(container) = err.downcast_ref::<Container>() {
                        return Some(container);
                    }
                    source = err.source();
                }
                None
            },
        }
    }

    /// Iterates over the container links, starting with `self`.
    #[inline]
    pub fn links(&self) -> Links<'_> {
        Links { next: Some(self) }
    }

    /// Number of container links in the chain, including `self`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.links().count()
    }

    /// Chain-aware equality.
    ///
    /// - A [`Container`] target matches any link with the same message; native
    ///   causes are not consulted.
    /// - A native target matches by identity against the innermost native
    ///   cause and its `source()` chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_stamp::{Container, Severity};
    ///
    /// let root = Container::new(Severity::ERROR, "not found");
    /// let outer = Container::new(Severity::WARN, "lookup failed").caused_by(root.clone());
    ///
    /// assert!(outer.is(&root));
    /// assert!(!outer.is(&std::io::Error::other("not found")));
    /// ```
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        if let Some(target) = target.downcast_ref::<Container>() {
            return self.is_container(target);
        }

        match self.unwrap_cause() {
            Some(native) => native_chain_is(native, target),
            None => false,
        }
    }

    /// Whether any link of the chain carries `target`'s message.
    pub fn is_container(&self, target: &Container) -> bool {
        self.links().any(|link| link.message == target.message)
    }

    /// Whether the native chain holds an `E` equal to `target`.
    ///
    /// Useful for value-like sentinel errors, where identity comparison
    /// through [`Container::is`] is too strict.
    pub fn is_value<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.native_chain()
            .filter_map(|err| err.downcast_ref::<E>())
            .any(|err| err == target)
    }

    /// Returns the first `E` found in the native chain.
    pub fn find_cause<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.native_chain().find_map(|err| err.downcast_ref::<E>())
    }

    /// The innermost native cause followed by its `source()` chain.
    fn native_chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let first: Option<&(dyn Error + 'static)> = self.unwrap_cause().map(|err| err as _);
        core::iter::successors(first, |&err| err.source())
    }

    /// The innermost link that carries captured frames.
    pub fn stack_link(&self) -> Option<&Container> {
        self.links().filter(|link| link.stamp.frames.is_some()).last()
    }

    /// Resolves the captured stack of the innermost link that holds one into
    /// `dest`, returning the number of frames written.
    ///
    /// The stack is taken from the link closest to the original failure;
    /// 0 means no link of the chain captured frames.
    pub fn stack_trace(&self, dest: &mut Vec<String>) -> usize {
        let Some(link) = self.stack_link() else {
            dest.clear();
            return 0;
        };

        match (link.stamp.frames.as_ref(), link.stamp.policy.as_ref()) {
            (Some(frames), Some(policy)) => policy.symbolize(frames, dest),
            _ => {
                dest.clear();
                0
            },
        }
    }

    /// Visits every container link from the innermost to the outermost.
    ///
    /// A link whose cause is a native error is visited with that error; all
    /// other links are visited with `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_stamp::{Container, Severity};
    ///
    /// let c = Container::new(Severity::ERROR, "C");
    /// let b = Container::new(Severity::ERROR, "B").caused_by(c);
    /// let a = Container::new(Severity::ERROR, "A").caused_by(b);
    ///
    /// let mut order = Vec::new();
    /// a.walk(|link, _| order.push(link.message().to_string()));
    /// assert_eq!(order, ["C", "B", "A"]);
    /// ```
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Container, Option<&'a (dyn Error + Send + Sync + 'static)>),
    {
        let links: SmallVec<[&'a Container; 8]> = self.links().collect();

        for link in links.into_iter().rev() {
            let wrapped = match link.cause.as_ref() {
                Some(Cause::Native(native)) => Some(native.as_ref()),
                _ => None,
            };
            visit(link, wrapped);
        }
    }
}
