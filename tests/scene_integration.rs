//! End-to-end scenarios: kernel-built graphs, scope boundaries, prefab and
//! asset resolution, and test-stepped updates, wired the way an embedding
//! test host would use the framework.

use std::sync::Arc;

use glam::Vec3;
use serde_json::json;

use wirework::{
    Behaviour, BindScope, Clock, Collision, Document, Handle, InjectError, Kernel, LayerMask,
    Node, Pose, PrefabTemplate, ResourceError,
};

struct MockBehaviour {
    node: Arc<Node>,
    update_count: u32,
    collision_count: u32,
}

impl Behaviour for MockBehaviour {
    fn update(&mut self, _clock: &Clock) {
        self.update_count += 1;
    }

    fn on_collision_enter(&mut self, _collision: &Collision) {
        self.collision_count += 1;
    }
}

struct Spin;

impl Behaviour for Spin {
    fn update(&mut self, _clock: &Clock) {}
}

struct AudioClip {
    #[allow(dead_code)]
    name: &'static str,
}

struct PhysicMaterial {
    #[allow(dead_code)]
    bounciness: f32,
}

fn test_kernel() -> Kernel {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut kernel = Kernel::new();
    kernel.bind_behaviour::<MockBehaviour, _>(BindScope::Boundary, |cx| {
        Ok(MockBehaviour {
            node: cx.node(),
            update_count: 0,
            collision_count: 0,
        })
    });

    let loader = kernel.loader_mut();
    loader.insert_document(
        "xml/test",
        Document::from_value(json!({ "root": { "string": "Hello World" } })),
    );
    loader.insert_template(
        "mesh/sphere",
        PrefabTemplate::new("sphere")
            .with_pose(Pose::from_position(Vec3::ZERO))
            .with_behaviour(|_| Spin),
    );
    loader.insert_asset("audio/beep", AudioClip { name: "beep" });
    loader.insert_asset("physic/bouncy", PhysicMaterial { bounciness: 0.9 });

    kernel
}

#[test]
fn behaviour_is_updated_once_per_step() {
    let mut kernel = test_kernel();
    let mock = kernel.get::<MockBehaviour>().unwrap();

    assert_eq!(mock.lock().update_count, 0);
    kernel.step(1);
    assert_eq!(mock.lock().update_count, 1);
}

#[test]
fn destroyed_node_is_not_updated() {
    let mut kernel = test_kernel();
    let mock = kernel.get::<MockBehaviour>().unwrap();

    let node = mock.lock().node.clone();
    assert_eq!(kernel.count(), 1);
    node.destroy();
    // Count reflects destruction immediately, before any step.
    assert_eq!(kernel.count(), 0);

    kernel.step(1);
    assert_eq!(mock.lock().update_count, 0);
}

#[test]
fn nested_boundary_behaviour_gets_its_own_node() {
    struct HasNested {
        node: Arc<Node>,
        nested: Handle<MockBehaviour>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasNested, _>(BindScope::Boundary, |cx| {
        let nested = cx.get::<MockBehaviour>()?;
        // Parent the nested behaviour's node under our own.
        let node = cx.node();
        nested
            .lock()
            .node
            .transform()
            .set_parent(Some(node.transform()));
        Ok(HasNested { node, nested })
    });

    let outer = kernel.get::<HasNested>().unwrap();
    let outer = outer.lock();
    let nested_node = outer.nested.lock().node.clone();
    assert!(!Arc::ptr_eq(&outer.node, &nested_node));
    assert!(Arc::ptr_eq(
        &nested_node.transform().parent().unwrap(),
        outer.node.transform()
    ));
}

#[test]
fn sibling_boundary_parameters_resolve_to_distinct_nodes() {
    struct HasSiblings {
        a: Handle<MockBehaviour>,
        b: Handle<MockBehaviour>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasSiblings, _>(BindScope::Boundary, |cx| {
        Ok(HasSiblings {
            a: cx.get_boundary::<MockBehaviour>()?,
            b: cx.get_boundary::<MockBehaviour>()?,
        })
    });

    let siblings = kernel.get::<HasSiblings>().unwrap();
    let siblings = siblings.lock();
    let a = siblings.a.lock().node.clone();
    let b = siblings.b.lock().node.clone();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_ne!(a.id(), b.id());
}

#[test]
fn injected_prefab_has_distinct_detached_transform() {
    struct HasPrefab {
        node: Arc<Node>,
        nested: Arc<Node>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasPrefab, _>(BindScope::Boundary, |cx| {
        let node = cx.node();
        let nested = cx.prefab("mesh/sphere")?;
        nested.transform().set_parent(Some(node.transform()));
        Ok(HasPrefab { node, nested })
    });

    let prefab = kernel.get::<HasPrefab>().unwrap();
    let prefab = prefab.lock();
    assert!(!Arc::ptr_eq(&prefab.node, &prefab.nested));
    assert!(Arc::ptr_eq(
        &prefab.nested.transform().parent().unwrap(),
        prefab.node.transform()
    ));
    assert!(prefab.node.transform().parent().is_none());
}

#[test]
fn prefab_loading() {
    let mut kernel = test_kernel();
    let node = kernel.instantiate("mesh/sphere").unwrap();
    assert_eq!(node.name(), Some("sphere"));
    assert!(node.transform().parent().is_none());
}

#[test]
fn missing_prefab_errors() {
    struct HasMissingPrefab {
        #[allow(dead_code)]
        nested: Arc<Node>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasMissingPrefab, _>(BindScope::Shared, |cx| {
        Ok(HasMissingPrefab {
            nested: cx.prefab("does/not/exist")?,
        })
    });

    match kernel.get::<HasMissingPrefab>() {
        Err(InjectError::Resource(ResourceError::NotFound(path))) => {
            assert_eq!(path, "does/not/exist");
        }
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn document_resolution() {
    let kernel = test_kernel();
    let doc = kernel.loader().load("xml/test").unwrap();
    assert_eq!(doc.get("root/string"), Some("Hello World"));

    assert!(matches!(
        kernel.loader().load("xml/absent"),
        Err(ResourceError::NotFound(_))
    ));
}

#[test]
fn scene_object_creation_count() {
    struct Example;

    let mut kernel = test_kernel();
    kernel.bind::<Example, _>(BindScope::Shared, |cx| {
        // One tracked behaviour from the boundary-bound mock, one from the
        // sphere prefab's template.
        cx.get::<MockBehaviour>()?;
        cx.prefab("mesh/sphere")?;
        Ok(Example)
    });

    kernel.get::<Example>().unwrap();
    kernel.step(1);
    assert_eq!(kernel.count(), 2);
}

#[test]
fn attributed_audio_clip_loads() {
    struct HasAudioClip {
        clip: Arc<AudioClip>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasAudioClip, _>(BindScope::Shared, |cx| {
        Ok(HasAudioClip {
            clip: cx.asset::<AudioClip>("audio/beep")?,
        })
    });

    let has = kernel.get::<HasAudioClip>().unwrap();
    assert_eq!(has.lock().clip.name, "beep");
}

#[test]
fn missing_audio_clip_errors() {
    struct HasMissingClip {
        #[allow(dead_code)]
        clip: Arc<AudioClip>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasMissingClip, _>(BindScope::Shared, |cx| {
        Ok(HasMissingClip {
            clip: cx.asset::<AudioClip>("does/not/exist")?,
        })
    });

    assert!(matches!(
        kernel.get::<HasMissingClip>(),
        Err(InjectError::Resource(ResourceError::NotFound(_)))
    ));
}

#[test]
fn physic_material_resolution() {
    struct HasPhysicMaterial {
        #[allow(dead_code)]
        material: Arc<PhysicMaterial>,
    }

    let mut kernel = test_kernel();
    kernel.bind::<HasPhysicMaterial, _>(BindScope::Shared, |cx| {
        Ok(HasPhysicMaterial {
            material: cx.asset::<PhysicMaterial>("physic/bouncy")?,
        })
    });
    assert!(kernel.get::<HasPhysicMaterial>().is_ok());

    let mut kernel = test_kernel();
    kernel.bind::<HasPhysicMaterial, _>(BindScope::Shared, |cx| {
        Ok(HasPhysicMaterial {
            material: cx.asset::<PhysicMaterial>("does/not/exist")?,
        })
    });
    assert!(matches!(
        kernel.get::<HasPhysicMaterial>(),
        Err(InjectError::Resource(ResourceError::NotFound(_)))
    ));
}

#[test]
fn on_collision_enter_called() {
    let mut kernel = test_kernel();
    let mock = kernel.get::<MockBehaviour>().unwrap();

    assert_eq!(mock.lock().collision_count, 0);
    let node = mock.lock().node.clone();
    // Event-driven path: direct synchronous dispatch, no step involved.
    node.on_collision_enter(&Collision::default());
    assert_eq!(mock.lock().collision_count, 1);
    assert_eq!(mock.lock().update_count, 0);
}

#[test]
fn layer_masks_interpreted() {
    let layers = LayerMask::default();
    assert_eq!(layers.name_to_layer("Default"), Some(0));
}
