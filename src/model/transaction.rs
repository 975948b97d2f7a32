use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Response of the blockchain.info `rawaddr` endpoint. Only the fields the graph needs are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAddressResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub txs: Vec<RawTransaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub hash:   Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<TxInput>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub out:    Vec<TxOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default)]
    pub prev_out: Option<PrevOut>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrevOut {
    #[serde(default)]
    pub addr: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub addr: Option<String>,
}

impl RawTransaction {
    pub fn new(
        hash: &str,
        inputs: &[&str],
        outputs: &[&str],
    ) -> Self {
        Self {
            hash:   Some(hash.to_string()),
            inputs: inputs
                .iter()
                .map(|addr| TxInput { prev_out: Some(PrevOut { addr: Some(addr.to_string()) }) })
                .collect(),
            out:    outputs.iter().map(|addr| TxOutput { addr: Some(addr.to_string()) }).collect(),
        }
    }

    pub fn hash(&self) -> &str { self.hash.as_deref().unwrap_or_default() }

    // Spent addresses, skipping inputs without a previous output or address
    pub fn input_addresses(&self) -> Vec<&str> {
        self.inputs
            .iter()
            .filter_map(|input| input.prev_out.as_ref()?.addr.as_deref())
            .filter(|addr| !addr.is_empty())
            .collect()
    }

    pub fn output_addresses(&self) -> Vec<&str> {
        self.out.iter().filter_map(|output| output.addr.as_deref()).filter(|addr| !addr.is_empty()).collect()
    }
}
