//! Shared overlay mount point.
//!
//! Every booking widget renders its overlay into the same detached element so
//! the overlay escapes the clipping and stacking of wherever the button sits.
//! The element is created by the first consumer and removed with the last
//! one; the registry counts consumers instead of probing the document.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use web_sys::Element;

use crate::config::OVERLAY_ROOT_ID;

#[derive(Debug, Error, PartialEq)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

pub trait MountHost {
    type Node: Clone;

    /// A node with the fixed identity left over from an earlier lifetime, if any.
    fn find_existing(&self) -> Option<Self::Node>;
    fn create(&self) -> Result<Self::Node, MountError>;
    fn remove(&self, node: &Self::Node);
}

struct Inner<H: MountHost> {
    host: H,
    node: Option<H::Node>,
    consumers: usize,
}

pub struct OverlayMountRegistry<H: MountHost> {
    inner: Rc<RefCell<Inner<H>>>,
}

impl<H: MountHost> OverlayMountRegistry<H> {
    pub fn new(host: H) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                host,
                node: None,
                consumers: 0,
            })),
        }
    }

    pub fn acquire(&self) -> Result<MountHandle<H>, MountError> {
        let mut inner = self.inner.borrow_mut();
        let node = match inner.node.clone() {
            Some(node) => node,
            None => {
                let node = match inner.host.find_existing() {
                    Some(node) => node,
                    None => inner.host.create()?,
                };
                inner.node = Some(node.clone());
                node
            }
        };
        inner.consumers += 1;
        debug!("overlay root acquired, {} consumer(s)", inner.consumers);
        Ok(MountHandle {
            registry: Rc::clone(&self.inner),
            node,
        })
    }

    pub fn release(&self, handle: MountHandle<H>) {
        drop(handle);
    }

    pub fn consumers(&self) -> usize {
        self.inner.borrow().consumers
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().node.is_some()
    }
}

/// Keeps the shared mount point alive. Dropping it gives the reference back.
pub struct MountHandle<H: MountHost> {
    registry: Rc<RefCell<Inner<H>>>,
    node: H::Node,
}

impl<H: MountHost> MountHandle<H> {
    pub fn node(&self) -> &H::Node {
        &self.node
    }
}

impl<H: MountHost> Drop for MountHandle<H> {
    fn drop(&mut self) {
        let mut inner = self.registry.borrow_mut();
        inner.consumers = inner.consumers.saturating_sub(1);
        if inner.consumers == 0 {
            if let Some(node) = inner.node.take() {
                inner.host.remove(&node);
                debug!("overlay root removed");
            }
        }
    }
}

/// Mounts the overlay root as a fixed, top-most child of `<body>`.
pub struct BodyMountHost {
    id: &'static str,
}

impl BodyMountHost {
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }
}

impl MountHost for BodyMountHost {
    type Node = Element;

    fn find_existing(&self) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(self.id)
    }

    fn create(&self) -> Result<Element, MountError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(MountError::NoDocument)?;
        let body = document.body().ok_or(MountError::NoDocument)?;
        let element = document
            .create_element("div")
            .map_err(|e| MountError::Dom(format!("{:?}", e)))?;
        element.set_id(self.id);
        element
            .set_attribute("style", "position: fixed; top: 0; left: 0; z-index: 999999;")
            .map_err(|e| MountError::Dom(format!("{:?}", e)))?;
        body.append_child(&element)
            .map_err(|e| MountError::Dom(format!("{:?}", e)))?;
        Ok(element)
    }

    fn remove(&self, node: &Element) {
        if let Some(parent) = node.parent_node() {
            if let Err(e) = parent.remove_child(node) {
                warn!("Failed to remove overlay root: {:?}", e);
            }
        }
    }
}

thread_local! {
    static OVERLAY_ROOT: OverlayMountRegistry<BodyMountHost> =
        OverlayMountRegistry::new(BodyMountHost::new(OVERLAY_ROOT_ID));
}

pub fn acquire_overlay_root() -> Result<MountHandle<BodyMountHost>, MountError> {
    OVERLAY_ROOT.with(|registry| registry.acquire())
}

pub fn release_overlay_root(handle: MountHandle<BodyMountHost>) {
    OVERLAY_ROOT.with(|registry| {
        registry.release(handle);
        debug!(
            "overlay root released, {} consumer(s) left, mounted: {}",
            registry.consumers(),
            registry.is_mounted()
        );
    });
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    pub(crate) struct FakeHost {
        next_id: Cell<u32>,
        pub live: Rc<RefCell<Vec<u32>>>,
        leftover: Cell<Option<u32>>,
        fail: Cell<bool>,
    }

    impl MountHost for FakeHost {
        type Node = u32;

        fn find_existing(&self) -> Option<u32> {
            self.leftover.take()
        }

        fn create(&self) -> Result<u32, MountError> {
            if self.fail.get() {
                return Err(MountError::NoDocument);
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.live.borrow_mut().push(id);
            Ok(id)
        }

        fn remove(&self, node: &u32) {
            self.live.borrow_mut().retain(|n| n != node);
        }
    }

    fn registry() -> (OverlayMountRegistry<FakeHost>, Rc<RefCell<Vec<u32>>>) {
        let host = FakeHost::default();
        let live = Rc::clone(&host.live);
        (OverlayMountRegistry::new(host), live)
    }

    #[test]
    fn three_consumers_share_one_node() {
        let (registry, live) = registry();
        let a = registry.acquire().unwrap();
        let b = registry.acquire().unwrap();
        let c = registry.acquire().unwrap();
        assert_eq!(live.borrow().len(), 1);
        assert_eq!(a.node(), b.node());
        assert_eq!(b.node(), c.node());

        registry.release(a);
        drop(b);
        assert_eq!(live.borrow().len(), 1);
        assert_eq!(registry.consumers(), 1);

        registry.release(c);
        assert!(live.borrow().is_empty());
        assert!(!registry.is_mounted());
    }

    #[test]
    fn interleaved_mounts_never_duplicate_or_drop_early() {
        let (registry, live) = registry();
        let mut handles = Vec::new();
        // 1 acquires, 0 releases the oldest handle
        let script = [1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0];
        for step in script {
            if step == 1 {
                handles.push(registry.acquire().unwrap());
            } else {
                handles.remove(0);
            }
            assert!(live.borrow().len() <= 1);
            assert_eq!(live.borrow().len() == 1, !handles.is_empty());
            assert_eq!(registry.consumers(), handles.len());
        }
    }

    #[test]
    fn remount_after_full_release_creates_fresh_node() {
        let (registry, live) = registry();
        let first = *registry.acquire().unwrap().node();
        let second = registry.acquire().unwrap();
        assert_ne!(first, *second.node());
        assert_eq!(live.borrow().as_slice(), &[*second.node()]);
    }

    #[test]
    fn existing_node_is_adopted() {
        let host = FakeHost::default();
        host.leftover.set(Some(42));
        let registry = OverlayMountRegistry::new(host);
        let handle = registry.acquire().unwrap();
        assert_eq!(*handle.node(), 42);
    }

    #[test]
    fn failed_create_leaves_count_untouched() {
        let host = FakeHost::default();
        host.fail.set(true);
        let registry = OverlayMountRegistry::new(host);
        assert_eq!(registry.acquire().err(), Some(MountError::NoDocument));
        assert_eq!(registry.consumers(), 0);
        assert!(!registry.is_mounted());
    }
}
