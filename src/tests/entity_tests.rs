use crate::tests::{world_with_kinds, Position};
use crate::components::Value;
use crate::error::EcsError;
use rand::prelude::SliceRandom;
use crate::config::WorldConfig;
use crate::world::World;
use rand::thread_rng;

#[test]
pub fn creation_is_staged_until_update() {
	let (mut world, kinds) = world_with_kinds();
	let entity = world.create_entity([kinds.size.default_instance()]).unwrap();

	assert!(!world.is_alive(entity), "Entity should not be live before the update");
	assert_eq!(world.pending(), 1);
	assert!(matches!(
		world.get_component(entity, &kinds.size),
		Err(EcsError::ComponentNotPresent { .. })
	));

	let report = world.update();
	assert_eq!(report.spawned, 1);
	assert!(world.is_alive(entity));
	assert!(world.has_component(entity, &kinds.size));
	assert_eq!(world.entities(), &[entity]);
	assert_eq!(world.pending(), 0);
}

#[test]
pub fn duplicate_kind_on_create_fails() {
	let (mut world, kinds) = world_with_kinds();
	let result = world.create_entity([kinds.size.default_instance(), kinds.size.default_instance()]);

	assert_eq!(
		result,
		Err(EcsError::DuplicateComponentKind {
			entity: None,
			kind: "Size".to_string(),
		}),
		"No handle should be reported for an entity that was never created"
	);
	assert_eq!(world.pending(), 0, "A rejected entity should not be staged");
	assert!(world.update().is_empty());
}

#[test]
pub fn duplicate_kind_on_add_fails() {
	let (mut world, kinds) = world_with_kinds();
	let entity = world.create_entity([kinds.size.default_instance()]).unwrap();
	world.update();

	let result = world.add_component(entity, kinds.size.instance([("width", 4.0)]).unwrap());
	assert_eq!(
		result,
		Err(EcsError::DuplicateComponentKind {
			entity: Some(entity),
			kind: "Size".to_string(),
		})
	);

	world.add_component(entity, kinds.velocity.default_instance()).unwrap();
	let staged_twice = world.add_component(entity, kinds.velocity.default_instance());
	assert!(
		matches!(staged_twice, Err(EcsError::DuplicateComponentKind { .. })),
		"A kind staged for insertion should count as present"
	);

	let size = world.get_component(entity, &kinds.size).unwrap();
	assert_eq!(size.read::<f64>("width").unwrap(), 1.0, "The original instance should be untouched");
}

#[test]
pub fn remove_then_add_in_one_frame() {
	let (mut world, kinds) = world_with_kinds();
	let entity = world.create_entity([kinds.size.default_instance()]).unwrap();
	world.update();

	assert!(matches!(
		world.remove_component(entity, &kinds.velocity),
		Err(EcsError::ComponentNotPresent { .. })
	));

	world.remove_component(entity, &kinds.size).unwrap();
	world.add_component(entity, kinds.size.instance([("width", 9.0)]).unwrap()).unwrap();
	assert_eq!(
		world.get_component(entity, &kinds.size).unwrap().read::<f64>("width").unwrap(),
		1.0,
		"Staged changes should not be visible yet"
	);

	let report = world.update();
	assert_eq!((report.removed, report.inserted), (1, 1));
	assert_eq!(world.get_component(entity, &kinds.size).unwrap().read::<f64>("width").unwrap(), 9.0);
}

#[test]
pub fn destroy_is_staged_and_checked() {
	let (mut world, kinds) = world_with_kinds();
	let entity = world.create_entity([kinds.size.default_instance()]).unwrap();
	world.update();

	world.destroy_entity(entity).unwrap();
	assert!(world.is_alive(entity), "Destruction should wait for the update");
	assert_eq!(world.destroy_entity(entity), Err(EcsError::NoSuchEntity(entity)));
	assert_eq!(
		world.add_component(entity, kinds.velocity.default_instance()),
		Err(EcsError::NoSuchEntity(entity))
	);

	let report = world.update();
	assert_eq!(report.despawned, 1);
	assert!(!world.is_alive(entity));
	assert!(world.is_empty());
	assert_eq!(world.destroy_entity(entity), Err(EcsError::NoSuchEntity(entity)));
}

#[test]
pub fn many_changes_staged_in_one_frame() {
	let (mut world, kinds) = world_with_kinds();
	let entities: Vec<_> =
		(0..2048).map(|_| world.create_entity([kinds.size.default_instance()]).unwrap()).collect();
	world.update();

	for entity in &entities[..1024] {
		world.destroy_entity(*entity).unwrap();
	}
	for entity in &entities[1024..] {
		world.add_component(*entity, kinds.velocity.default_instance()).unwrap();
		world.remove_component(*entity, &kinds.size).unwrap();
	}
	assert_eq!(world.pending(), 1024 + 2 * 1024);
	assert_eq!(world.destroy_entity(entities[0]), Err(EcsError::NoSuchEntity(entities[0])));
	assert!(matches!(
		world.remove_component(entities[2047], &kinds.size),
		Err(EcsError::ComponentNotPresent { .. })
	));

	let report = world.update();
	assert_eq!((report.despawned, report.inserted, report.removed), (1024, 1024, 1024));
	assert!(world.entities().iter().all(|e| world.has_component(*e, &kinds.velocity)));
	assert!(!world.entities().iter().any(|e| world.has_component(*e, &kinds.size)));

	let reused = world.create_entity([kinds.velocity.default_instance()]).unwrap();
	assert!(reused.index() < 1024, "A freed slot should be reused");
	world.add_component(reused, kinds.size.default_instance()).unwrap();
	assert!(
		matches!(
			world.add_component(reused, kinds.velocity.default_instance()),
			Err(EcsError::DuplicateComponentKind { .. })
		),
		"A recycled slot should only know about the components of its new entity"
	);
}

#[test]
pub fn destroying_a_pending_entity_cancels_it() {
	let (mut world, kinds) = world_with_kinds();
	let entity = world.create_entity([kinds.size.default_instance()]).unwrap();
	world.destroy_entity(entity).unwrap();

	let report = world.update();
	assert_eq!((report.spawned, report.despawned), (1, 1));
	assert!(!world.is_alive(entity));
	assert!(world.entities().is_empty());
}

#[test]
pub fn recycled_slots_do_not_alias() {
	let (mut world, kinds) = world_with_kinds();
	let old = world.create_entity([kinds.size.default_instance()]).unwrap();
	world.update();
	world.destroy_entity(old).unwrap();
	world.update();

	let new = world.create_entity([kinds.size.instance([("height", 3.0)]).unwrap()]).unwrap();
	world.update();

	assert_eq!(new.index(), old.index(), "The freed slot should be reused");
	assert_ne!(new.version(), old.version());
	assert!(world.is_alive(new));
	assert!(!world.is_alive(old));
	assert!(matches!(
		world.get_component(old, &kinds.size),
		Err(EcsError::ComponentNotPresent { .. })
	));
}

#[test]
pub fn relation_to_destroyed_target_fails_gracefully() {
	let (mut world, kinds) = world_with_kinds();
	let follower = world.define_component("Follower", [("following", Value::Entity(None))]).unwrap();

	let position = world.instance_of(&Position { x: 3.0, y: 4.0 }).unwrap();
	let target = world.create_entity([position]).unwrap();
	let chaser = world.create_entity([follower.instance([("following", target)]).unwrap()]).unwrap();
	world.update();

	let resolve = |world: &World| -> crate::error::Result<f32> {
		let target = world.get_component(chaser, &follower)?.read::<crate::entities::Entity>("following")?;
		world.get_component(target, &kinds.position)?.read::<f32>("x")
	};
	assert_eq!(resolve(&world), Ok(3.0));

	world.destroy_entity(target).unwrap();
	assert_eq!(resolve(&world), Ok(3.0), "The target is still live until the update");

	world.update();
	assert!(matches!(resolve(&world), Err(EcsError::ComponentNotPresent { .. })));
}

#[test]
pub fn shuffled_destruction_keeps_creation_order() {
	let (mut world, kinds) = world_with_kinds();
	let entities: Vec<_> = (0..64)
		.map(|i| world.create_entity([kinds.size.instance([("width", i as f64)]).unwrap()]).unwrap())
		.collect();
	world.update();

	let mut doomed: Vec<_> = entities.iter().copied().filter(|e| e.index() % 3 == 0).collect();
	doomed.shuffle(&mut thread_rng());
	for entity in &doomed {
		world.destroy_entity(*entity).unwrap();
	}

	let report = world.update();
	assert_eq!(report.despawned, doomed.len());

	let survivors: Vec<_> = entities.iter().copied().filter(|e| e.index() % 3 != 0).collect();
	assert_eq!(world.entities(), survivors.as_slice(), "Survivors should stay in creation order");
}

#[test]
pub fn entity_limit_is_enforced() {
	let mut world = World::with_config(WorldConfig {
		max_entities: Some(2),
		..WorldConfig::default()
	});
	let tag = world.define_component("Tag", [("on", true)]).unwrap();

	let a = world.create_entity([tag.default_instance()]).unwrap();
	world.create_entity([tag.default_instance()]).unwrap();
	assert_eq!(world.create_entity([tag.default_instance()]), Err(EcsError::CapacityExceeded(2)));

	world.update();
	world.destroy_entity(a).unwrap();
	world.update();
	assert!(world.create_entity([tag.default_instance()]).is_ok(), "Destroying should free capacity");
}
