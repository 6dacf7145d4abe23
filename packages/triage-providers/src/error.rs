pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidConfig { message: String },
	/// Transport-level failure: connect error, timeout, or non-2xx status.
	#[error("{message}")]
	Unavailable { message: String },
	/// The oracle answered 2xx but the payload did not match the contract.
	#[error("{message}")]
	MalformedResponse { message: String },
}
impl Error {
	pub(crate) fn unavailable(err: reqwest::Error) -> Self {
		Self::Unavailable { message: err.to_string() }
	}
}
