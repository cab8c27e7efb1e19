use hexsaurus_codec::Codec;
use tracing::{debug, warn};

use crate::cmd::{collect_inputs, EncodeArgs};
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_conversions, Conversion, Direction, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let codec = Codec::with_separator(args.separator);
    if codec.effective_separator() != codec.config().separator {
        warn!(
            requested = %codec.config().separator,
            "separator is a table sound, using \"-\""
        );
    }

    let inputs = collect_inputs(args.inputs)?;
    let conversions = encode_all(&codec, inputs, args.strict)?;
    print_conversions(Direction::Encode, &conversions, format);

    Ok(SUCCESS)
}

fn encode_all(codec: &Codec, inputs: Vec<String>, strict: bool) -> CliResult<Vec<Conversion>> {
    let mut conversions = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = match codec.try_encode(&input) {
            Ok(words) => words,
            Err(err) if strict => {
                return Err(codec_error(&format!("cannot encode {input:?}"), err));
            }
            Err(err) => {
                warn!(%input, error = %err, "not hexadecimal, emitting empty output");
                String::new()
            }
        };
        debug!(%input, %output, "encoded");
        conversions.push(Conversion { input, output });
    }
    Ok(conversions)
}
