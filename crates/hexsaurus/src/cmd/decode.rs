use hexsaurus_codec::Codec;
use tracing::debug;

use crate::cmd::{collect_inputs, DecodeArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_conversions, Conversion, Direction, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let inputs = collect_inputs(args.inputs)?;
    let conversions = decode_all(&Codec::new(), inputs, args.lossy);
    print_conversions(Direction::Decode, &conversions, format);

    Ok(SUCCESS)
}

fn decode_all(codec: &Codec, inputs: Vec<String>, lossy: bool) -> Vec<Conversion> {
    inputs
        .into_iter()
        .map(|input| {
            let output = if lossy {
                codec.decode_lossy(&input)
            } else {
                codec.decode(&input)
            };
            debug!(%input, %output, lossy, "decoded");
            Conversion { input, output }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_input() {
        let conversions = decode_all(
            &Codec::new(),
            vec!["bocoad-taiwayz".to_string(), "zu".to_string()],
            false,
        );
        assert_eq!(conversions[0].output, "0a1b2c3d4f");
        assert_eq!(conversions[1].output, "ff");
    }

    #[test]
    fn lossy_flag_selects_position_blind_tokenizer() {
        let conversions = decode_all(&Codec::new(), vec!["bocoad-taiwayz".to_string()], true);
        assert_eq!(conversions[0].output, "0a1b2c3d0ef");
    }
}
