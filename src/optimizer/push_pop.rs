use crate::line::Line;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    CollectingPush,
    CollectingPop,
}

/// Rewrites every adjacent push-run/pop-run pair into register moves,
/// leaving all other lines untouched. Whole runs are consumed at once,
/// so a single application fully converges.
pub fn collapse_push_pop(lines: &[Line]) -> Vec<Line> {
    let mut output = vec![];
    let mut pushes: Vec<&Line> = vec![];
    let mut pops: Vec<&Line> = vec![];
    let mut phase = Phase::CollectingPush;

    for line in lines {
        match phase {
            Phase::CollectingPush => {
                if line.is_push() {
                    pushes.push(line);
                } else if line.is_pop() {
                    pops.push(line);
                    phase = Phase::CollectingPop;
                } else {
                    output.extend(pushes.drain(..).cloned());
                    output.push(line.clone());
                }
            }
            Phase::CollectingPop => {
                if line.is_pop() {
                    pops.push(line);
                } else {
                    output.extend(pair_runs(&pushes, &pops));
                    pushes.clear();
                    pops.clear();
                    if line.is_push() {
                        // a push right after a pop run opens the next run
                        pushes.push(line);
                    } else {
                        output.push(line.clone());
                        phase = Phase::CollectingPush;
                    }
                }
            }
        }
    }

    match phase {
        Phase::CollectingPush => output.extend(pushes.drain(..).cloned()),
        Phase::CollectingPop => output.extend(pair_runs(&pushes, &pops)),
    }

    output
}

/// Pairs the push run in LIFO order (last push first) against the pop run
/// in original order. Equal-operand pairs vanish, unequal pairs become a
/// `mov pop-operand, push-operand`. Leftover pops keep their place at the
/// end of the group; leftover pushes go to the front so they still execute
/// before any pop-derived move.
fn pair_runs(pushes: &[&Line], pops: &[&Line]) -> Vec<Line> {
    let mut group = vec![];

    for pos in 0..pushes.len().max(pops.len()) {
        let push = pushes.len().checked_sub(pos + 1).map(|idx| pushes[idx]);
        let pop = pops.get(pos);

        match (push, pop) {
            (Some(push), Some(pop)) => {
                if push.operand_tokens() == pop.operand_tokens() {
                    continue;
                }
                group.push(Line::new(&format!(
                    "mov {}, {}",
                    pop.operand(),
                    push.operand()
                )));
            }
            (Some(push), None) => group.insert(0, (*push).clone()),
            (None, Some(pop)) => group.push((*pop).clone()),
            (None, None) => unreachable!(),
        }
    }

    group
}
