use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt::{self, Display},
    iter::FusedIterator,
    slice,
};

use log::trace;
use unicode_id_start::{is_id_continue, is_id_start};

use crate::error::ExtensionError;

/// name of the universal root type present in every [`TypeTable`]
pub const ROOT_TYPE_NAME: &str = "object";

/// Index of a type in the [`TypeTable`] that declared it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(usize);

impl TypeKey {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything carrying attributes that can be queried with [`TypeTable::has_custom_attribute`]
pub trait Attributed {
    /// attribute types applied to this item, in declaration order
    fn attributes(&self) -> &[TypeKey];
}

/// Declaration of a new type, passed to [`TypeTable::declare`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    name: String,
    base: Option<TypeKey>,
    interfaces: Vec<TypeKey>,
    attributes: Vec<TypeKey>,
    is_interface: bool,
    is_abstract: bool,
    is_sealed: bool,
    is_value_type: bool,
    nullable_of: Option<TypeKey>,
}

impl TypeDecl {
    /// a class deriving from the root type unless [`TypeDecl::extends`] says otherwise
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            is_interface: false,
            is_abstract: false,
            is_sealed: false,
            is_value_type: false,
            nullable_of: None,
        }
    }

    /// an interface, which has no base type
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            is_interface: true,
            is_abstract: true,
            ..Self::class(name)
        }
    }

    /// a value type, implicitly sealed
    pub fn value_type(name: impl Into<String>) -> Self {
        Self {
            is_value_type: true,
            is_sealed: true,
            ..Self::class(name)
        }
    }

    /// a value type wrapping `inner` so that it admits absence
    pub fn nullable(name: impl Into<String>, inner: TypeKey) -> Self {
        Self {
            nullable_of: Some(inner),
            ..Self::value_type(name)
        }
    }

    pub fn extends(mut self, base: TypeKey) -> Self {
        self.base = Some(base);
        self
    }

    /// add a directly implemented interface, order of calls is the declaration order
    pub fn implements(mut self, interface: TypeKey) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_attribute(mut self, attribute: TypeKey) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn mark_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn mark_sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }
}

/// A declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    key: TypeKey,
    name: String,
    base: Option<TypeKey>,
    interfaces: Vec<TypeKey>,
    attributes: Vec<TypeKey>,
    members: Vec<MemberInfo>,
    is_interface: bool,
    is_abstract: bool,
    is_sealed: bool,
    is_value_type: bool,
    nullable_of: Option<TypeKey>,
}

impl TypeInfo {
    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` for the root type and for interfaces
    pub fn base(&self) -> Option<TypeKey> {
        self.base
    }

    pub fn interfaces(&self) -> &[TypeKey] {
        &self.interfaces
    }

    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_sealed(&self) -> bool {
        self.is_sealed
    }

    pub fn is_value_type(&self) -> bool {
        self.is_value_type
    }

    /// a type that can be neither instantiated nor derived from
    pub fn is_static(&self) -> bool {
        self.is_abstract && self.is_sealed
    }

    /// whether a variable of this type can hold no value
    pub fn is_nullable(&self) -> bool {
        !self.is_value_type || self.nullable_of.is_some()
    }

    /// the wrapped type of a nullable value type
    pub fn nullable_underlying(&self) -> Option<TypeKey> {
        self.nullable_of
    }
}

impl Attributed for TypeInfo {
    fn attributes(&self) -> &[TypeKey] {
        &self.attributes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Constructor,
    Event,
}

/// A member of a declared type, added with [`TypeTable::add_member`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    name: String,
    kind: MemberKind,
    declaring_type: TypeKey,
    attributes: Vec<TypeKey>,
    parameters: Vec<ParameterInfo>,
}

impl MemberInfo {
    pub fn new(declaring_type: TypeKey, name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            declaring_type,
            attributes: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: TypeKey) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// append a parameter, its position is the number of parameters added before it
    pub fn with_parameter(mut self, name: impl Into<String>, parameter_type: TypeKey, attributes: &[TypeKey]) -> Self {
        self.parameters.push(ParameterInfo {
            name: name.into(),
            position: self.parameters.len(),
            parameter_type,
            attributes: attributes.to_vec(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn declaring_type(&self) -> TypeKey {
        self.declaring_type
    }

    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }
}

impl Attributed for MemberInfo {
    fn attributes(&self) -> &[TypeKey] {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    name: String,
    position: usize,
    parameter_type: TypeKey,
    attributes: Vec<TypeKey>,
}

impl ParameterInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn parameter_type(&self) -> TypeKey {
        self.parameter_type
    }
}

impl Attributed for ParameterInfo {
    fn attributes(&self) -> &[TypeKey] {
        &self.attributes
    }
}

/// Explicit type-relationship table standing in for runtime reflection.
///
/// Types are appended in declaration order and every relation must point at an already declared
/// type, so base chains are acyclic by construction. The table always holds the root type
/// [`ROOT_TYPE_NAME`], which every class derives from unless it names another base.
#[derive(Debug, Clone)]
pub struct TypeTable {
    types: Vec<TypeInfo>,
    by_name: HashMap<String, TypeKey>,
    bound: HashMap<TypeId, TypeKey>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn new() -> Self {
        let root = TypeInfo {
            key: TypeKey(0),
            name: ROOT_TYPE_NAME.to_owned(),
            base: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            members: Vec::new(),
            is_interface: false,
            is_abstract: false,
            is_sealed: false,
            is_value_type: false,
            nullable_of: None,
        };

        Self {
            by_name: HashMap::from([(root.name.clone(), root.key)]),
            types: vec![root],
            bound: HashMap::new(),
        }
    }

    /// the universal root type
    pub fn root(&self) -> TypeKey {
        TypeKey(0)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// never true, the root type is always present
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn info(&self, key: TypeKey) -> Option<&TypeInfo> {
        self.types.get(key.0)
    }

    pub fn lookup(&self, name: &str) -> Option<TypeKey> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> slice::Iter<'_, TypeInfo> {
        self.types.iter()
    }

    fn require(&self, key: TypeKey) -> Result<&TypeInfo, ExtensionError> {
        self.info(key)
            .ok_or_else(|| ExtensionError::UnknownType(key.to_string()))
    }

    /// add a type to the table
    pub fn declare(&mut self, decl: TypeDecl) -> Result<TypeKey, ExtensionError> {
        if !is_type_name(&decl.name) {
            return Err(ExtensionError::InvalidTypeName(decl.name));
        }

        if self.by_name.contains_key(&decl.name) {
            return Err(ExtensionError::DuplicateType(decl.name));
        }

        let base = match (decl.is_interface, decl.base) {
            (true, Some(_)) => {
                return Err(ExtensionError::InvalidRelation(format!(
                    "interface {} cannot have a base type",
                    decl.name
                )));
            }
            (true, None) if decl.is_sealed => {
                return Err(ExtensionError::InvalidRelation(format!(
                    "interface {} cannot be sealed",
                    decl.name
                )));
            }
            (true, None) => None,
            (false, None) => Some(self.root()),
            (false, Some(base)) => {
                let info = self.require(base)?;
                if info.is_interface || info.is_sealed {
                    return Err(ExtensionError::InvalidRelation(format!(
                        "{} cannot derive from {}",
                        decl.name, info.name
                    )));
                }
                Some(base)
            }
        };

        for interface in &decl.interfaces {
            let info = self.require(*interface)?;
            if !info.is_interface {
                return Err(ExtensionError::InvalidRelation(format!(
                    "{} cannot implement {}, it is not an interface",
                    decl.name, info.name
                )));
            }
        }

        for attribute in decl.attributes.iter().chain(&decl.nullable_of) {
            self.require(*attribute)?;
        }

        let key = TypeKey(self.types.len());
        trace!("declared type {} as {key}", decl.name);

        self.by_name.insert(decl.name.clone(), key);
        self.types.push(TypeInfo {
            key,
            name: decl.name,
            base,
            interfaces: decl.interfaces,
            attributes: decl.attributes,
            members: Vec::new(),
            is_interface: decl.is_interface,
            is_abstract: decl.is_abstract,
            is_sealed: decl.is_sealed,
            is_value_type: decl.is_value_type,
            nullable_of: decl.nullable_of,
        });

        Ok(key)
    }

    /// attach a member to its declaring type
    pub fn add_member(&mut self, member: MemberInfo) -> Result<(), ExtensionError> {
        let referenced = member
            .attributes
            .iter()
            .chain(member.parameters.iter().flat_map(|p| {
                std::iter::once(&p.parameter_type).chain(&p.attributes)
            }));

        for key in referenced {
            self.require(*key)?;
        }

        let declaring = member.declaring_type;
        let info = self
            .types
            .get_mut(declaring.0)
            .ok_or_else(|| ExtensionError::UnknownType(declaring.to_string()))?;

        if info.members.iter().any(|m| m.name == member.name) {
            return Err(ExtensionError::InvalidRelation(format!(
                "{} already has a member named {}",
                info.name, member.name
            )));
        }

        trace!("added member {} to {}", member.name, info.name);
        info.members.push(member);
        Ok(())
    }

    /// associate the Rust type `T` with a declared type, for [`TypeTable::every_type`]
    pub fn bind<T: Any>(&mut self, key: TypeKey) -> Result<(), ExtensionError> {
        self.require(key)?;
        self.bound.insert(TypeId::of::<T>(), key);
        Ok(())
    }

    pub fn key_of<T: Any>(&self) -> Option<TypeKey> {
        self.bound.get(&TypeId::of::<T>()).copied()
    }

    /// the type itself, then its ancestors from most to least derived excluding the root type,
    /// then its directly implemented interfaces in declaration order
    pub fn all_base_types(&self, key: TypeKey) -> Result<AllBaseTypes<'_>, ExtensionError> {
        let info = self.require(key)?;

        Ok(AllBaseTypes {
            table: self,
            chain: Some(key),
            interfaces: info.interfaces.iter(),
        })
    }

    /// [`TypeTable::all_base_types`] of the type bound to the dynamic type of `value`
    pub fn every_type(&self, value: &dyn Any) -> Result<AllBaseTypes<'_>, ExtensionError> {
        let type_id = value.type_id();
        let key = self
            .bound
            .get(&type_id)
            .copied()
            .ok_or_else(|| ExtensionError::UnboundType(format!("{type_id:?}")))?;

        self.all_base_types(key)
    }

    /// whether `ty` is `target` or derives from or directly implements it
    ///
    /// every declared type, interfaces included, is assignable to the root type
    pub fn is_assignable_to(&self, ty: TypeKey, target: TypeKey) -> bool {
        if target == self.root() {
            return self.info(ty).is_some();
        }

        self.all_base_types(ty)
            .map(|mut types| types.any(|t| t.key == target))
            .unwrap_or(false)
    }

    /// whether `target` carries at least one attribute of type `attribute` or a type derived
    /// from it
    pub fn has_custom_attribute<A: Attributed + ?Sized>(&self, target: &A, attribute: TypeKey) -> bool {
        target
            .attributes()
            .iter()
            .any(|applied| self.is_assignable_to(*applied, attribute))
    }
}

/// Iterator returned by [`TypeTable::all_base_types`]
pub struct AllBaseTypes<'a> {
    table: &'a TypeTable,
    /// next type of the base chain to yield
    chain: Option<TypeKey>,
    interfaces: slice::Iter<'a, TypeKey>,
}

impl<'a> Iterator for AllBaseTypes<'a> {
    type Item = &'a TypeInfo;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(key) = self.chain.take() {
            if let Some(info) = self.table.info(key) {
                let root = self.table.root();
                self.chain = info.base.filter(|base| *base != root);
                return Some(info);
            }
        }

        self.interfaces.next().and_then(|key| self.table.info(*key))
    }
}

impl<'a> FusedIterator for AllBaseTypes<'a> {}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();

    match chars.next() {
        Some(c) if c == '_' || is_id_start(c) => chars.all(is_id_continue),
        _ => false,
    }
}

/// `.`-separated identifiers, e.g. `System.Collections.List`
fn is_type_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

#[cfg(test)]
mod test {
    use crate::{
        error::ExtensionError,
        reflect::{MemberInfo, MemberKind, ROOT_TYPE_NAME, TypeDecl, TypeInfo, TypeKey, TypeTable},
    };

    fn names<'a>(types: impl Iterator<Item = &'a TypeInfo>) -> Vec<&'a str> {
        types.map(|t| t.name()).collect()
    }

    struct Zoo {
        table: TypeTable,
        pet: TypeKey,
        guard: TypeKey,
        animal: TypeKey,
        mammal: TypeKey,
        dog: TypeKey,
    }

    fn zoo() -> Zoo {
        let mut table = TypeTable::new();
        let pet = table
            .declare(TypeDecl::interface("IPet"))
            .expect("Failed to declare IPet");
        let guard = table
            .declare(TypeDecl::interface("IGuard"))
            .expect("Failed to declare IGuard");
        let animal = table
            .declare(TypeDecl::class("Animal").mark_abstract())
            .expect("Failed to declare Animal");
        let mammal = table
            .declare(TypeDecl::class("Mammal").extends(animal))
            .expect("Failed to declare Mammal");
        let dog = table
            .declare(
                TypeDecl::class("Dog")
                    .extends(mammal)
                    .implements(pet)
                    .implements(guard),
            )
            .expect("Failed to declare Dog");

        Zoo {
            table,
            pet,
            guard,
            animal,
            mammal,
            dog,
        }
    }

    #[test]
    fn three_level_walk() {
        let zoo = zoo();
        let walk = zoo.table.all_base_types(zoo.dog).expect("Dog is declared");

        assert_eq!(names(walk), vec!["Dog", "Mammal", "Animal", "IPet", "IGuard"]);
    }

    #[test]
    fn walk_excludes_root_except_for_root_itself() {
        let zoo = zoo();
        let root = zoo.table.root();

        let animal = zoo.table.all_base_types(zoo.animal).expect("Animal is declared");
        assert_eq!(names(animal), vec!["Animal"]);

        let itself = zoo.table.all_base_types(root).expect("Root is declared");
        assert_eq!(names(itself), vec![ROOT_TYPE_NAME]);

        let pet = zoo.table.all_base_types(zoo.pet).expect("IPet is declared");
        assert_eq!(names(pet), vec!["IPet"]);
    }

    #[test]
    fn rejects_bad_declarations() {
        let mut zoo = zoo();

        assert_eq!(
            zoo.table.declare(TypeDecl::class("1Cat")),
            Err(ExtensionError::InvalidTypeName("1Cat".into()))
        );
        assert_eq!(
            zoo.table.declare(TypeDecl::class("Zoo..Cat")),
            Err(ExtensionError::InvalidTypeName("Zoo..Cat".into()))
        );
        assert_eq!(
            zoo.table.declare(TypeDecl::class("Dog")),
            Err(ExtensionError::DuplicateType("Dog".into()))
        );
        assert_eq!(
            zoo.table.declare(TypeDecl::class("Cat").extends(TypeKey(99))),
            Err(ExtensionError::UnknownType("#99".into()))
        );
        assert!(matches!(
            zoo.table.declare(TypeDecl::class("Cat").extends(zoo.pet)),
            Err(ExtensionError::InvalidRelation(_))
        ));
        assert!(matches!(
            zoo.table.declare(TypeDecl::class("Cat").implements(zoo.mammal)),
            Err(ExtensionError::InvalidRelation(_))
        ));
        assert!(matches!(
            zoo.table.declare(TypeDecl::interface("ICat").extends(zoo.animal)),
            Err(ExtensionError::InvalidRelation(_))
        ));
        assert!(matches!(
            zoo.table.declare(TypeDecl::interface("ICat").mark_sealed()),
            Err(ExtensionError::InvalidRelation(_))
        ));

        let sealed = zoo
            .table
            .declare(TypeDecl::class("Puppy").extends(zoo.dog).mark_sealed())
            .expect("Failed to declare Puppy");
        assert!(matches!(
            zoo.table.declare(TypeDecl::class("Newborn").extends(sealed)),
            Err(ExtensionError::InvalidRelation(_))
        ));

        assert!(zoo.table.lookup("Cat").is_none());
        assert_eq!(zoo.table.lookup("Zoo.Puppy"), None);
        assert_eq!(zoo.table.lookup("Puppy"), Some(sealed));
    }

    #[test]
    fn unicode_and_namespaced_names() {
        let mut table = TypeTable::new();

        assert!(table.declare(TypeDecl::class("Zoo.Käfig")).is_ok());
        assert!(table.declare(TypeDecl::class("_Hidden")).is_ok());
        assert!(table.declare(TypeDecl::class("")).is_err());
        assert!(table.declare(TypeDecl::class("Zoo.")).is_err());
    }

    #[test]
    fn every_type_of_bound_value() {
        struct Dog;
        struct Cat;

        let mut zoo = zoo();
        zoo.table.bind::<Dog>(zoo.dog).expect("Dog is declared");

        let walk = zoo.table.every_type(&Dog).expect("Dog is bound");
        assert_eq!(names(walk), vec!["Dog", "Mammal", "Animal", "IPet", "IGuard"]);

        let boxed: Box<dyn std::any::Any> = Box::new(Dog);
        let walk = zoo.table.every_type(&*boxed).expect("Dog is bound");
        assert_eq!(walk.count(), 5);

        assert!(matches!(
            zoo.table.every_type(&Cat),
            Err(ExtensionError::UnboundType(_))
        ));
        assert_eq!(zoo.table.key_of::<Dog>(), Some(zoo.dog));
        assert_eq!(zoo.table.key_of::<Cat>(), None);
    }

    #[test]
    fn attributes_honour_inheritance() {
        let mut zoo = zoo();
        let attribute = zoo
            .table
            .declare(TypeDecl::class("Attribute").mark_abstract())
            .expect("Failed to declare Attribute");
        let obsolete = zoo
            .table
            .declare(TypeDecl::class("ObsoleteAttribute").extends(attribute))
            .expect("Failed to declare ObsoleteAttribute");
        let removed = zoo
            .table
            .declare(TypeDecl::class("RemovedAttribute").extends(obsolete))
            .expect("Failed to declare RemovedAttribute");
        let serializable = zoo
            .table
            .declare(TypeDecl::class("SerializableAttribute").extends(attribute))
            .expect("Failed to declare SerializableAttribute");

        let bark = MemberInfo::new(zoo.dog, "Bark", MemberKind::Method)
            .with_attribute(removed)
            .with_parameter("volume", zoo.table.root(), &[serializable]);
        zoo.table.add_member(bark).expect("Failed to add Bark");

        let dog = zoo.table.info(zoo.dog).expect("Dog is declared");
        let bark = dog.member("Bark").expect("Bark was added");

        assert!(zoo.table.has_custom_attribute(bark, removed));
        assert!(zoo.table.has_custom_attribute(bark, obsolete));
        assert!(zoo.table.has_custom_attribute(bark, attribute));
        assert!(!zoo.table.has_custom_attribute(bark, serializable));
        assert!(!zoo.table.has_custom_attribute(dog, attribute));

        let volume = &bark.parameters()[0];
        assert_eq!(volume.position(), 0);
        assert!(zoo.table.has_custom_attribute(volume, serializable));
        assert!(!zoo.table.has_custom_attribute(volume, obsolete));

        let duplicate = MemberInfo::new(zoo.dog, "Bark", MemberKind::Field);
        assert!(matches!(
            zoo.table.add_member(duplicate),
            Err(ExtensionError::InvalidRelation(_))
        ));
    }

    #[test]
    fn assignability() {
        let zoo = zoo();
        let root = zoo.table.root();

        assert!(zoo.table.is_assignable_to(zoo.dog, zoo.animal));
        assert!(zoo.table.is_assignable_to(zoo.dog, zoo.guard));
        assert!(zoo.table.is_assignable_to(zoo.dog, root));
        assert!(!zoo.table.is_assignable_to(zoo.animal, zoo.dog));
        assert!(zoo.table.is_assignable_to(zoo.pet, root));
        assert!(!zoo.table.is_assignable_to(root, zoo.pet));
        assert!(!zoo.table.is_assignable_to(TypeKey(99), zoo.dog));
        assert!(!zoo.table.is_assignable_to(TypeKey(99), root));
    }

    #[test]
    fn interface_attribute_matches_root() {
        let mut zoo = zoo();
        let tagged = zoo
            .table
            .declare(TypeDecl::class("Kennel").with_attribute(zoo.guard))
            .expect("Failed to declare Kennel");
        let kennel = zoo.table.info(tagged).expect("Kennel is declared");

        assert!(zoo.table.has_custom_attribute(kennel, zoo.guard));
        assert!(zoo.table.has_custom_attribute(kennel, zoo.table.root()));
        assert!(!zoo.table.has_custom_attribute(kennel, zoo.pet));
    }

    #[test]
    fn static_and_nullable() {
        let mut table = TypeTable::new();
        let helpers = table
            .declare(TypeDecl::class("Helpers").mark_abstract().mark_sealed())
            .expect("Failed to declare Helpers");
        let int = table
            .declare(TypeDecl::value_type("Int32"))
            .expect("Failed to declare Int32");
        let maybe_int = table
            .declare(TypeDecl::nullable("NullableInt32", int))
            .expect("Failed to declare NullableInt32");
        let text = table
            .declare(TypeDecl::class("String").mark_sealed())
            .expect("Failed to declare String");

        let info = |key| table.info(key).expect("Type is declared");

        assert!(info(helpers).is_static());
        assert!(!info(text).is_static());
        assert!(!info(int).is_nullable());
        assert!(info(maybe_int).is_nullable());
        assert_eq!(info(maybe_int).nullable_underlying(), Some(int));
        assert!(info(text).is_nullable());
        assert_eq!(table.len(), 5);
    }
}
