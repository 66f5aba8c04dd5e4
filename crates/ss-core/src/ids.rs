//! Strongly typed agent identifier.
//!
//! Ids are issued by the world in creation order and never reused, so the
//! natural `Ord` of `AgentId` is also creation order.

use std::fmt;

/// Identifier of one agent.  Max ~4.3 billion agents per run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The first id a fresh world hands out.
    pub const FIRST: AgentId = AgentId(0);

    /// The id issued immediately after this one.
    #[inline]
    pub fn next(self) -> AgentId {
        AgentId(self.0 + 1)
    }

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
