mod legality;
