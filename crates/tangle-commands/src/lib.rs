//! Wire protocol for the tangle node API.
//!
//! Defines the command descriptors sent to a node and the typed responses
//! that come back. A command serializes as a JSON object whose `command`
//! field names the operation; all field names are camelCase on the wire.

pub mod command;
pub mod response;

pub use command::Command;
pub use response::{
    AddNeighborsResponse, AttachToTangleResponse, CheckConsistencyResponse,
    FindTransactionsResponse, GetBalancesResponse, GetInclusionStatesResponse, GetNeighborsResponse,
    GetNodeInfoResponse, GetTipsResponse, GetTransactionsToApproveResponse, GetTrytesResponse,
    MergeBatch, Neighbor, RemoveNeighborsResponse, WereAddressesSpentFromResponse,
};
