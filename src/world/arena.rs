//! Index-addressed tree of system entities.
//!
//! Children are owned through index lists; the parent index is a plain back
//! pointer. Ancestry queries walk parent indices.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::body::OrbitalZone;
use super::pipeline::Planet;
use super::resources::ResourceLedger;
use super::satellites::RingKind;
use super::system::{DerelictStation, GasGiant, StarshipGraveyard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is. Every kind is matched exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    System,
    Zone { zone: OrbitalZone },
    /// A planet, or a moon when its parent is a body.
    Planet(Box<Planet>),
    GasGiant(GasGiant),
    Asteroid { resources: ResourceLedger },
    LesserMoon { resources: ResourceLedger },
    PlanetaryRings { kind: RingKind },
    AsteroidBelt { resources: ResourceLedger },
    AsteroidCluster { resources: ResourceLedger },
    DerelictStation(DerelictStation),
    DustCloud,
    GravityRiptide,
    RadiationBursts,
    SolarFlares,
    StarshipGraveyard(StarshipGraveyard),
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::System => "System",
            NodeKind::Zone { .. } => "Zone",
            NodeKind::Planet(planet) if planet.is_moon => "Moon",
            NodeKind::Planet(_) => "Planet",
            NodeKind::GasGiant(_) => "Gas Giant",
            NodeKind::Asteroid { .. } => "Asteroid",
            NodeKind::LesserMoon { .. } => "Lesser Moon",
            NodeKind::PlanetaryRings { .. } => "Planetary Rings",
            NodeKind::AsteroidBelt { .. } => "Asteroid Belt",
            NodeKind::AsteroidCluster { .. } => "Asteroid Cluster",
            NodeKind::DerelictStation(_) => "Derelict Station",
            NodeKind::DustCloud => "Dust Cloud",
            NodeKind::GravityRiptide => "Gravity Riptide",
            NodeKind::RadiationBursts => "Radiation Bursts",
            NodeKind::SolarFlares => "Solar Flares",
            NodeKind::StarshipGraveyard(_) => "Starship Graveyard",
        }
    }

    /// Resource ledger carried by this node, if any.
    pub fn resources(&self) -> Option<&ResourceLedger> {
        match self {
            NodeKind::Planet(planet) => Some(&planet.resources),
            NodeKind::Asteroid { resources }
            | NodeKind::LesserMoon { resources }
            | NodeKind::AsteroidBelt { resources }
            | NodeKind::AsteroidCluster { resources } => Some(resources),
            NodeKind::DerelictStation(station) => Some(&station.resources),
            NodeKind::StarshipGraveyard(graveyard) => Some(&graveyard.resources),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub kind: NodeKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, linking it under `parent`.
    ///
    /// Panics if `parent` is not in this arena.
    pub fn insert(&mut self, parent: Option<NodeId>, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = parent {
            assert!(parent.0 < self.nodes.len(), "parent {parent} is not in the arena");
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(Node {
            id,
            name: name.into(),
            parent,
            children: Vec::new(),
            kind,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// First parentless node.
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.parent.is_none()).map(|n| n.id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            out.push(ancestor);
            current = self.parent(ancestor);
        }
        out
    }

    /// Every node below `id`, depth first, in child order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Nearest enclosing orbital zone, including the node itself.
    pub fn enclosing_zone(&self, id: NodeId) -> Option<OrbitalZone> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|n| match self.get(n).map(|node| &node.kind) {
                Some(NodeKind::Zone { zone }) => Some(*zone),
                _ => None,
            })
    }

    /// Nearest enclosing node of kind System.
    pub fn enclosing_system(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .into_iter()
            .find(|n| matches!(self.get(*n).map(|node| &node.kind), Some(NodeKind::System)))
    }

    /// Planets and moons with their ids.
    pub fn planets(&self) -> impl Iterator<Item = (NodeId, &Planet)> {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Planet(planet) => Some((n.id, planet.as_ref())),
            _ => None,
        })
    }

    /// Nesting depth below the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Arena, NodeId, NodeId, NodeId) {
        let mut arena = Arena::new();
        let system = arena.insert(None, "Vexis", NodeKind::System);
        let zone = arena.insert(
            Some(system),
            "Outer Reaches",
            NodeKind::Zone {
                zone: OrbitalZone::OuterReaches,
            },
        );
        let planet = arena.insert(Some(zone), "Vexis I", NodeKind::Planet(Box::default()));
        (arena, system, zone, planet)
    }

    #[test]
    fn test_ancestry() {
        let (mut arena, system, zone, planet) = sample();
        let moon = arena.insert(
            Some(planet),
            "Vexis I a",
            NodeKind::LesserMoon {
                resources: ResourceLedger::new(),
            },
        );

        assert_eq!(arena.ancestors(moon), vec![planet, zone, system]);
        assert_eq!(arena.enclosing_zone(moon), Some(OrbitalZone::OuterReaches));
        assert_eq!(arena.enclosing_zone(system), None);
        assert_eq!(arena.enclosing_system(moon), Some(system));
        assert_eq!(arena.depth(moon), 3);
        assert_eq!(arena.root(), Some(system));
    }

    #[test]
    fn test_descendants_are_depth_first() {
        let (mut arena, system, zone, planet) = sample();
        let moon = arena.insert(
            Some(planet),
            "Vexis I a",
            NodeKind::LesserMoon {
                resources: ResourceLedger::new(),
            },
        );
        let cloud = arena.insert(Some(zone), "Dust Cloud", NodeKind::DustCloud);

        assert_eq!(arena.descendants(system), vec![zone, planet, moon, cloud]);
        assert_eq!(arena.children(zone), &[planet, cloud]);
    }

    #[test]
    fn test_serde_round_trip() {
        let (arena, _, _, planet) = sample();
        let json = serde_json::to_string(&arena).unwrap();
        let restored: Arena = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, arena);
        assert_eq!(restored.get(planet).unwrap().kind.label(), "Planet");
    }
}
