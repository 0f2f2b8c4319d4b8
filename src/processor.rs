//! The options walker
//!
//! [`OptionsProcessor`] rewrites an options object in place into the
//! canonical form native renderers consume. For every key, depth-first in
//! insertion order, it:
//!
//! 1. computes the dotted path of the entry,
//! 2. runs the processors registered for that path,
//! 3. resolves colors (even falsy ones, so `null` becomes `"NoColor"`),
//! 4. stops here if the value is falsy,
//! 5. runs the built-in transform for the key's [`FieldKind`],
//! 6. reports the key to the deprecation notifier with the pre-walk snapshot
//!    (or, for an expanded legacy shape, with the node as it was before),
//! 7. descends into the (possibly rewritten) value if it is an object or array,
//!    unless the key is the pass-through key.

use serde_json::{Map, Value};

use crate::assets::{AssetCatalog, AssetResolver};
use crate::color::{ColorResolver, NativeColorResolver};
use crate::config::NormalizerConfig;
use crate::deprecations::{DeprecationLog, DeprecationNotifier};
use crate::error::Result;
use crate::ids::{IdProvider, UniqueIdProvider};
use crate::path::resolve_object_path;
use crate::registry::{ComponentCatalog, ComponentRegistry, ProcessorLookup, ProcessorRegistry};
use crate::schema::{FieldKind, FieldSchema};
use crate::store::{InMemoryPropsStore, PropsStore};
use crate::transforms::{self, is_falsy, LegacyShape};

/// External services the walker calls into.
pub struct Collaborators<'a> {
    pub ids: &'a dyn IdProvider,
    pub colors: &'a dyn ColorResolver,
    pub assets: &'a dyn AssetResolver,
    pub props: &'a mut dyn PropsStore,
    pub components: &'a mut dyn ComponentRegistry,
    pub processors: &'a dyn ProcessorLookup,
    pub deprecations: &'a mut dyn DeprecationNotifier,
}

/// Which notifier hook receives visited keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audit {
    Options,
    DefaultOptions,
}

/// State shared by every level of one walk.
#[derive(Clone, Copy)]
struct Walk<'w> {
    snapshot: &'w Map<String, Value>,
    command_name: &'w str,
    audit: Audit,
}

/// Normalizes options objects.
pub struct OptionsProcessor<'a> {
    services: Collaborators<'a>,
    schema: FieldSchema,
    pass_through_key: String,
}

impl<'a> OptionsProcessor<'a> {
    /// Processor using the key-name conventions and `passProps` as pass-through key.
    pub fn new(services: Collaborators<'a>) -> Self {
        Self { services, schema: FieldSchema::new(), pass_through_key: "passProps".to_string() }
    }

    pub fn with_config(services: Collaborators<'a>, config: &NormalizerConfig) -> Self {
        Self {
            services,
            schema: FieldSchema::with_overrides(config.fields.clone()),
            pass_through_key: config.walk.pass_through_key.clone(),
        }
    }

    pub fn with_schema(mut self, schema: FieldSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn pass_through_key(&self) -> &str {
        &self.pass_through_key
    }

    /// Normalize `options`, reporting keys through `on_process_options`.
    pub fn process_options(
        &mut self,
        command_name: &str,
        options: &mut Map<String, Value>,
    ) -> Result<()> {
        let span = tracing::debug_span!("process_options", command = command_name);
        let _guard = span.enter();
        self.walk_root(command_name, options, Audit::Options)
    }

    /// Normalize default options, reporting keys through `on_process_default_options`.
    pub fn process_default_options(
        &mut self,
        command_name: &str,
        options: &mut Map<String, Value>,
    ) -> Result<()> {
        let span = tracing::debug_span!("process_default_options", command = command_name);
        let _guard = span.enter();
        self.walk_root(command_name, options, Audit::DefaultOptions)
    }

    fn walk_root(
        &mut self,
        command_name: &str,
        options: &mut Map<String, Value>,
        audit: Audit,
    ) -> Result<()> {
        let snapshot = options.clone();
        let walk = Walk { snapshot: &snapshot, command_name, audit };
        self.process_object(options, walk, None)
    }

    fn process_object(
        &mut self,
        node: &mut Map<String, Value>,
        walk: Walk<'_>,
        parent_path: Option<&str>,
    ) -> Result<()> {
        // Keys present when the node is entered; entries are rewritten, never added
        let keys: Vec<String> = node.keys().cloned().collect();
        for key in &keys {
            self.process_entry(node, key, walk, parent_path)?;
        }
        Ok(())
    }

    fn process_sequence(
        &mut self,
        items: &mut [Value],
        walk: Walk<'_>,
        parent_path: &str,
    ) -> Result<()> {
        for (index, item) in items.iter_mut().enumerate() {
            let key = index.to_string();
            let path = resolve_object_path(&key, Some(parent_path));
            self.apply_registered_processors(item, &path, walk.command_name);
            // Index keys never name a field, so no built-in transform applies
            if is_falsy(item) {
                continue;
            }
            self.notify(&key, walk);
            self.descend(item, walk, &path)?;
        }
        Ok(())
    }

    fn process_entry(
        &mut self,
        node: &mut Map<String, Value>,
        key: &str,
        walk: Walk<'_>,
        parent_path: Option<&str>,
    ) -> Result<()> {
        let path = resolve_object_path(key, parent_path);
        let Some(slot) = node.get_mut(key) else {
            return Ok(());
        };
        self.apply_registered_processors(slot, &path, walk.command_name);

        let kind = self.schema.classify(key);
        tracing::trace!(%path, %kind, "normalizing option");

        if kind == FieldKind::Color {
            transforms::apply_color(self.services.colors, key, node)?;
        }
        if node.get(key).map_or(true, is_falsy) {
            return Ok(());
        }

        match self.apply_field_transform(kind, key, node, &path)? {
            Some(legacy) => self.report_legacy(&legacy, walk),
            None => self.notify(key, walk),
        }

        if key == self.pass_through_key {
            return Ok(());
        }
        match node.get_mut(key) {
            Some(value) => self.descend(value, walk, &path),
            None => Ok(()),
        }
    }

    /// Built-in transform for `kind`; at most one applies to any key.
    fn apply_field_transform(
        &mut self,
        kind: FieldKind,
        key: &str,
        node: &mut Map<String, Value>,
        path: &str,
    ) -> Result<Option<LegacyShape>> {
        let services = &mut self.services;
        match kind {
            FieldKind::Component => transforms::apply_component(
                services.ids,
                &mut *services.components,
                &mut *services.props,
                key,
                node,
                path,
            )?,
            FieldKind::Image => transforms::apply_image(services.assets, key, node)?,
            FieldKind::Buttons => {
                transforms::apply_buttons_pass_props(&mut *services.props, key, node)
            }
            FieldKind::SearchBar => return Ok(transforms::apply_search_bar(key, node)),
            FieldKind::Interpolation => return Ok(transforms::apply_interpolation(key, node)),
            kind if kind.is_stack_animation() => {
                transforms::apply_stack_animation(kind, key, node, path)?
            }
            _ => {}
        }
        Ok(None)
    }

    fn apply_registered_processors(&self, slot: &mut Value, path: &str, command_name: &str) {
        let Some(processors) = self.services.processors.get_processors(path) else {
            return;
        };
        for processor in processors {
            let current = slot.take();
            *slot = processor.apply(current, command_name);
        }
    }

    fn descend(&mut self, value: &mut Value, walk: Walk<'_>, path: &str) -> Result<()> {
        match value {
            Value::Object(map) => self.process_object(map, walk, Some(path)),
            Value::Array(items) => self.process_sequence(items, walk, path),
            _ => Ok(()),
        }
    }

    fn notify(&mut self, key: &str, walk: Walk<'_>) {
        match walk.audit {
            Audit::Options => {
                self.services.deprecations.on_process_options(key, walk.snapshot, walk.command_name)
            }
            Audit::DefaultOptions => {
                self.services.deprecations.on_process_default_options(key, walk.snapshot)
            }
        }
    }

    /// Report a key whose transform replaced a legacy shape.
    ///
    /// The regular hook receives the node as it was before the rewrite, in
    /// place of the snapshot visit. Default-options walks still get their own
    /// visit afterwards.
    fn report_legacy(&mut self, legacy: &LegacyShape, walk: Walk<'_>) {
        self.services.deprecations.on_process_options(
            &legacy.key,
            &legacy.parent,
            walk.command_name,
        );
        if walk.audit == Audit::DefaultOptions {
            self.notify(&legacy.key, walk);
        }
    }
}

/// Owned default collaborators.
///
/// ```
/// use navopts::processor::Services;
/// use serde_json::json;
///
/// let mut services = Services::default();
/// services.components.register_component("Home");
///
/// let mut options = json!({ "topBar": { "title": { "color": "red" } } });
/// let options = options.as_object_mut().unwrap();
/// services.processor().process_options("setRoot", options).unwrap();
/// assert_eq!(options["topBar"]["title"]["color"], json!(0xFFFF0000u32));
/// ```
#[derive(Debug, Default)]
pub struct Services {
    pub ids: UniqueIdProvider,
    pub colors: NativeColorResolver,
    pub assets: AssetCatalog,
    pub props: InMemoryPropsStore,
    pub components: ComponentCatalog,
    pub processors: ProcessorRegistry,
    pub deprecations: DeprecationLog,
    config: NormalizerConfig,
}

impl Services {
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let mut components = ComponentCatalog::new();
        components.set_lazy_registration(config.components.lazy_registration);
        for name in &config.components.names {
            components.register_component(name.as_str());
        }

        Self {
            ids: UniqueIdProvider::new(),
            colors: NativeColorResolver::new(config.walk.platform),
            assets: AssetCatalog::new(),
            props: InMemoryPropsStore::new(),
            components,
            processors: ProcessorRegistry::new(),
            deprecations: DeprecationLog::from_config(&config.deprecations),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Lend every service to a new processor.
    pub fn processor(&mut self) -> OptionsProcessor<'_> {
        let services = Collaborators {
            ids: &self.ids,
            colors: &self.colors,
            assets: &self.assets,
            props: &mut self.props,
            components: &mut self.components,
            processors: &self.processors,
            deprecations: &mut self.deprecations,
        };
        OptionsProcessor::with_config(services, &self.config)
    }
}
