use crate::entities::Entity;
use crate::world::{Dispatch, World};
use std::marker::PhantomData;
use crate::error::Result;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::ComponentInstance).
///
/// `A` is the type of the extra argument passed through every invocation, such as a time delta.
pub trait System<A> {
	/// Initialises the [System].
	/// Called once, when the system is added to a [World].
	fn setup(&mut self) {}

	/// Executes the system for one matching entity.
	fn run(&mut self, world: &mut Dispatch<'_>, entity: Entity, args: &A) -> Result<()>;
}

pub(crate) struct FnSystem<F>(pub(crate) F);

impl<A, F> System<A> for FnSystem<F>
where
	F: FnMut(&mut Dispatch<'_>, Entity, &A) -> Result<()>,
{
	fn run(&mut self, world: &mut Dispatch<'_>, entity: Entity, args: &A) -> Result<()> {
		(self.0)(world, entity, args)
	}
}

/// An invocable handle to a system registered with a [World].
pub struct SystemHandle<A> {
	pub(crate) index: usize,
	pub(crate) world: u32,
	phantom: PhantomData<fn(&A)>,
}

impl<A: 'static> SystemHandle<A> {
	pub(crate) fn new(index: usize, world: u32) -> Self {
		Self {
			index,
			world,
			phantom: PhantomData,
		}
	}

	/// Runs the system once for every entity in its current matching set.
	/// Returns the number of entities visited.
	pub fn run(&self, world: &mut World, args: &A) -> Result<usize> {
		world.run(self, args)
	}

	pub fn index(&self) -> usize {
		self.index
	}
}

impl<A> Clone for SystemHandle<A> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<A> Copy for SystemHandle<A> {}

impl<A> std::fmt::Debug for SystemHandle<A> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SystemHandle").field("index", &self.index).field("world", &self.world).finish()
	}
}
