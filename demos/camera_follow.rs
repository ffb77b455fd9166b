//! A headless camera-follow cartridge.
//!
//! A player box is steered by a scripted input sequence around a room larger than the screen.
//! The camera follows the player with some slack, and both are kept inside the room.
//! Run with `RUST_LOG=info cargo run --example camera_follow`.

use cart_ecs::prelude::*;
use log::info;

const FRAMES: u32 = 240;
const DT: f32 = 1.0 / 60.0;

#[derive(Default, Component, Debug, Clone)]
struct Position {
	x: f32,
	y: f32,
}

#[derive(Default, Component, Debug, Clone)]
struct Size {
	width: f32,
	height: f32,
}

#[derive(Default, Component, Debug, Clone)]
struct Velocity {
	dx: f32,
	dy: f32,
}

#[derive(Default, Component, Debug, Clone)]
struct Controlled {
	speed: f32,
}

/// Keeps the entity's rectangle inside the container's rectangle.
#[derive(Default, Component, Debug, Clone)]
struct Within {
	container: Option<Entity>,
}

/// Moves the entity so that the target's centre stays within `slack` of its own centre.
#[derive(Default, Component, Debug, Clone)]
struct Follower {
	following: Option<Entity>,
	slack: f32,
}

/// Direction held on the virtual d-pad for a given frame.
fn scripted_input(frame: u32) -> (f32, f32) {
	match frame / 40 {
		0 => (1.0, 0.0),
		1 => (1.0, 1.0),
		2 => (0.0, 1.0),
		3 => (-1.0, 0.0),
		4 => (0.0, -1.0),
		_ => (0.0, 0.0),
	}
}

fn centre(position: &Position, size: &Size) -> (f32, f32) {
	(position.x + size.width / 2.0, position.y + size.height / 2.0)
}

fn main() -> Result<()> {
	env_logger::init();

	let mut world = World::new();
	let position = world.register::<Position>()?;
	let size = world.register::<Size>()?;
	let velocity = world.register::<Velocity>()?;
	let controlled = world.register::<Controlled>()?;
	let within = world.register::<Within>()?;
	let follower = world.register::<Follower>()?;

	let room = [
		world.instance_of(&Position { x: 0.0, y: 0.0 })?,
		world.instance_of(&Size { width: 512.0, height: 384.0 })?,
	];
	let room = world.create_entity(room)?;

	let player = [
		world.instance_of(&Position { x: 120.0, y: 120.0 })?,
		world.instance_of(&Size { width: 8.0, height: 8.0 })?,
		world.instance_of(&Velocity::default())?,
		world.instance_of(&Controlled { speed: 90.0 })?,
		world.instance_of(&Within { container: Some(room) })?,
	];
	let player = world.create_entity(player)?;

	let camera = [
		world.instance_of(&Position { x: 0.0, y: 0.0 })?,
		world.instance_of(&Size { width: 128.0, height: 128.0 })?,
		world.instance_of(&Follower { following: Some(player), slack: 16.0 })?,
		world.instance_of(&Within { container: Some(room) })?,
	];
	let camera = world.create_entity(camera)?;

	let input = world.define_system(
		Filter::requiring([&velocity, &controlled]).named("input"),
		|world, entity, direction: &(f32, f32)| {
			let speed = world.read::<Controlled>(entity)?.speed;
			let (x, y) = *direction;
			let length = (x * x + y * y).sqrt().max(1.0);
			world.write(entity, &Velocity {
				dx: x / length * speed,
				dy: y / length * speed,
			})
		},
	)?;

	let movement = world.define_system(
		Filter::requiring([&position, &velocity]).named("movement"),
		|world, entity, dt: &f32| {
			let velocity = world.read::<Velocity>(entity)?;
			let mut position = world.read::<Position>(entity)?;
			position.x += velocity.dx * dt;
			position.y += velocity.dy * dt;
			world.write(entity, &position)
		},
	)?;

	let follow = world.define_system(
		Filter::requiring([&position, &size, &follower]).named("follow"),
		|world, entity, _: &()| {
			let follower = world.read::<Follower>(entity)?;
			let Some(target) = follower.following else {
				return Ok(());
			};

			let (tx, ty) = centre(&world.read::<Position>(target)?, &world.read::<Size>(target)?);
			let mut position = world.read::<Position>(entity)?;
			let (cx, cy) = centre(&position, &world.read::<Size>(entity)?);

			let (ox, oy) = (tx - cx, ty - cy);
			if ox.abs() > follower.slack {
				position.x += ox - follower.slack * ox.signum();
			}
			if oy.abs() > follower.slack {
				position.y += oy - follower.slack * oy.signum();
			}
			world.write(entity, &position)
		},
	)?;

	let containment = world.define_system(
		Filter::requiring([&position, &size, &within]).named("containment"),
		|world, entity, _: &()| {
			let Some(container) = world.read::<Within>(entity)?.container else {
				return Ok(());
			};

			let bounds = world.read::<Position>(container)?;
			let area = world.read::<Size>(container)?;
			let size = world.read::<Size>(entity)?;
			let mut position = world.read::<Position>(entity)?;

			// Entities larger than their container stick to its top-left corner.
			position.x = position.x.min(bounds.x + area.width - size.width).max(bounds.x);
			position.y = position.y.min(bounds.y + area.height - size.height).max(bounds.y);
			world.write(entity, &position)
		},
	)?;

	let render = world.define_system(
		Filter::requiring([&position, &size]).exclude([&follower]).named("render"),
		move |world, entity, camera: &Entity| {
			let view = world.read::<Position>(*camera)?;
			let position = world.read::<Position>(entity)?;
			let size = world.read::<Size>(entity)?;
			info!(
				"  rect {} at screen ({:.1}, {:.1}) size {}x{}",
				entity,
				position.x - view.x,
				position.y - view.y,
				size.width,
				size.height
			);
			Ok(())
		},
	)?;

	for frame in 0..FRAMES {
		world.update();

		input.run(&mut world, &scripted_input(frame))?;
		movement.run(&mut world, &DT)?;
		containment.run(&mut world, &())?;
		follow.run(&mut world, &())?;
		containment.run(&mut world, &())?;

		if frame % 40 == 0 {
			let view = world.read::<Position>(camera)?;
			info!("frame {}: camera at ({:.1}, {:.1})", frame, view.x, view.y);
			render.run(&mut world, &camera)?;
		}
	}

	let player = world.read::<Position>(player)?;
	let view = world.read::<Position>(camera)?;
	info!("final: player ({:.1}, {:.1}), camera ({:.1}, {:.1})", player.x, player.y, view.x, view.y);
	Ok(())
}
