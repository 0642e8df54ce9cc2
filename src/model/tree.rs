//! # Sub-Model Trees
//!
//! Every instance owns an ordered collection of attached child instances.
//! The tree preserves insertion order, allows the same type to be attached
//! any number of times (a "collection"), and supports a recursive
//! depth-first search by type or by a specific instance.
//!
//! The search argument is anything implementing [`ModelQuery`]:
//! [`ModelType`] matches by type identity (an instance "is" the type it was
//! built from), and [`ModelInstance`] matches by uuid equality.

use crate::model::{ModelInstance, ModelType};

/// What a tree search is looking for.
pub trait ModelQuery {
    fn matches(&self, instance: &ModelInstance) -> bool;

    /// Human-readable description of the target, used in the
    /// `ModelNotFound` error message.
    fn description(&self) -> String;
}

impl ModelQuery for ModelType {
    fn matches(&self, instance: &ModelInstance) -> bool {
        instance.is_a(self)
    }

    fn description(&self) -> String {
        self.name().to_string()
    }
}

impl ModelQuery for ModelInstance {
    fn matches(&self, instance: &ModelInstance) -> bool {
        instance.uuid() == self.uuid()
    }

    fn description(&self) -> String {
        format!("instance {}", self.uuid())
    }
}

/// Ordered collection of child instances attached to one parent.
#[derive(Debug, Clone, Default)]
pub struct SubModelTree {
    children: Vec<ModelInstance>,
}

impl SubModelTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_children(children: Vec<ModelInstance>) -> Self {
        Self { children }
    }

    /// Append a child. O(1) amortized; insertion order is preserved.
    pub fn add(&mut self, child: ModelInstance) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelInstance> {
        self.children.iter()
    }

    /// First attached child whose type key equals `key`.
    pub fn first_of(&self, key: &str) -> Option<&ModelInstance> {
        self.children.iter().find(|c| c.model_type().key() == key)
    }

    pub fn first_of_mut(&mut self, key: &str) -> Option<&mut ModelInstance> {
        self.children
            .iter_mut()
            .find(|c| c.model_type().key() == key)
    }

    /// All attached children whose type key equals `key`, insertion order.
    pub fn all_of(&self, key: &str) -> Vec<&ModelInstance> {
        self.children
            .iter()
            .filter(|c| c.model_type().key() == key)
            .collect()
    }

    pub fn all_of_mut(&mut self, key: &str) -> Vec<&mut ModelInstance> {
        self.children
            .iter_mut()
            .filter(|c| c.model_type().key() == key)
            .collect()
    }

    /// Depth-first search over the children: each child is checked before
    /// its own subtree, in attachment order. Returns the first match.
    pub fn search<Q: ModelQuery + ?Sized>(&self, query: &Q) -> Option<&ModelInstance> {
        for child in &self.children {
            if query.matches(child) {
                return Some(child);
            }
            if let Some(found) = child.children().search(query) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    fn ty(name: &str) -> ModelType {
        ModelType::builder(name).build()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let sdp = ty("SDP");
        let mut tree = SubModelTree::new();
        tree.add(sdp.instantiate_with([("name", "a")]));
        tree.add(sdp.instantiate_with([("name", "b")]));

        let all = tree.all_of("sdp");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].clone().get("name"), Some("a".into()));
        assert_eq!(all[1].clone().get("name"), Some("b".into()));
    }

    #[test]
    fn first_of_returns_first_added() {
        let sdp = ty("SDP");
        let mut tree = SubModelTree::new();
        tree.add(sdp.instantiate_with([("name", "a")]));
        tree.add(sdp.instantiate_with([("name", "b")]));

        let first = tree.first_of("sdp").unwrap();
        assert_eq!(first.clone().get("name"), Some("a".into()));
    }

    #[test]
    fn all_of_is_empty_for_unattached_type() {
        let tree = SubModelTree::new();
        assert!(tree.all_of("login").is_empty());
        assert!(tree.first_of("login").is_none());
    }

    #[test]
    fn find_self_returns_self() {
        let user_ty = ty("User");
        let user = user_ty.instantiate();
        let found = user.find(&user_ty).unwrap();
        assert_eq!(found.uuid(), user.uuid());
    }

    #[test]
    fn find_reaches_nested_descendant() {
        let password_ty = ty("Password");
        let login_ty = ty("Login");
        let user_ty = ty("User");

        let password = password_ty.instantiate();
        let password_uuid = password.uuid().to_string();
        let mut login = login_ty.instantiate();
        login.add_model(password);
        let mut user = user_ty.instantiate();
        user.add_model(login);

        assert_eq!(user.find(&login_ty).unwrap().model_type(), &login_ty);
        assert_eq!(user.find(&password_ty).unwrap().uuid(), password_uuid);
    }

    #[test]
    fn find_by_instance_matches_on_uuid() {
        let login_ty = ty("Login");
        let login = login_ty.instantiate();
        let target = login.clone();
        let mut user = ty("User").instantiate();
        user.add_model(login);

        let found = user.find(&target).unwrap();
        assert_eq!(found.uuid(), target.uuid());
    }

    #[test]
    fn find_unrelated_type_is_model_not_found() {
        let user = ty("User").instantiate();
        let foo_ty = ty("Foo");
        match user.find(&foo_ty) {
            Err(ModelError::ModelNotFound(name)) => assert_eq!(name, "Foo"),
            other => panic!("Expected ModelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn search_is_depth_first_in_attachment_order() {
        // tree: root -> [a (-> [target1]), target2]
        // depth-first must surface target1 (inside the first child) before
        // target2 (a direct child attached later).
        let target_ty = ty("Target");
        let mut a = ty("A").instantiate();
        let target1 = target_ty.instantiate();
        let target1_uuid = target1.uuid().to_string();
        a.add_model(target1);

        let mut root = ty("Root").instantiate();
        root.add_model(a);
        root.add_model(target_ty.instantiate());

        let found = root.find(&target_ty).unwrap();
        assert_eq!(found.uuid(), target1_uuid);
    }
}
